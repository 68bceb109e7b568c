mod common;

use std::sync::{Arc, Mutex};

use texbind::error::Error;
use texbind::{
    PixelFormat, SampleType, construct_texture_from_data, dispose_texture, pixel_format_rgb,
    pixel_format_rgba,
};

#[test]
fn format_accessors_are_stable_and_distinct() {
    assert_eq!(pixel_format_rgb(), pixel_format_rgb());
    assert_eq!(pixel_format_rgba(), pixel_format_rgba());
    assert_ne!(pixel_format_rgb(), pixel_format_rgba());
    assert_eq!(pixel_format_rgb().channels(), 3);
    assert_eq!(pixel_format_rgba().channels(), 4);
}

#[test]
fn construct_reports_inputs() {
    common::init_logging();
    let handle = construct_texture_from_data(vec![0u8; 3 * 5 * 3], 3, 5, pixel_format_rgb()).unwrap();

    assert_eq!(handle.width(), 3);
    assert_eq!(handle.height(), 5);
    assert_eq!(handle.format(), PixelFormat::Rgb);
    assert_eq!(handle.sample_type(), SampleType::U8);
    assert!(handle.needs_upload());
    assert_eq!(handle.version(), 1);
    assert!(!handle.is_disposed());
}

#[test]
fn rgba_2x2_round_trip_through_dispose() {
    common::init_logging();
    let samples: Vec<u8> = (0..16).collect();
    let mut handle = construct_texture_from_data(samples, 2, 2, pixel_format_rgba()).unwrap();

    assert_eq!(handle.width(), 2);
    assert_eq!(handle.height(), 2);
    assert_eq!(handle.format(), pixel_format_rgba());

    dispose_texture(&mut handle);
    assert!(handle.is_disposed());
    assert!(handle.texture().data().is_none());
    assert!(handle.texture().gpu_texture().is_none());
    assert!(!handle.needs_upload());
}

#[test]
fn short_buffer_is_rejected_by_texture_layer() {
    let err = construct_texture_from_data(vec![0u8; 15], 2, 2, PixelFormat::Rgba).unwrap_err();
    assert!(matches!(
        err,
        Error::BufferTooSmall {
            expected: 16,
            actual: 15
        }
    ));
}

#[test]
fn zero_extent_is_rejected() {
    let err = construct_texture_from_data(Vec::<u8>::new(), 0, 4, PixelFormat::Rgb).unwrap_err();
    assert!(matches!(err, Error::ZeroExtent { width: 0, height: 4 }));
}

#[test]
fn oversized_buffer_is_accepted() {
    let handle = construct_texture_from_data(vec![1.0f32; 40], 3, 3, PixelFormat::Rgba).unwrap();
    assert_eq!(handle.sample_type(), SampleType::F32);
    assert_eq!(handle.texture().data().map(|d| d.len()), Some(40));
}

#[test]
fn double_dispose_is_a_no_op() {
    let fired = Arc::new(Mutex::new(0));
    let mut handle = construct_texture_from_data(vec![0u8; 4], 1, 1, PixelFormat::Rgba).unwrap();

    let counter = fired.clone();
    handle.texture_mut().on_dispose(move |_id| {
        *counter.lock().unwrap() += 1;
    });

    dispose_texture(&mut handle);
    dispose_texture(&mut handle);

    assert!(handle.is_disposed());
    assert_eq!(*fired.lock().unwrap(), 1);
}

#[test]
fn dispose_listener_receives_texture_id() {
    let seen = Arc::new(Mutex::new(None));
    let mut handle = construct_texture_from_data(vec![0u8; 3], 1, 1, PixelFormat::Rgb).unwrap();
    let id = handle.id();

    let slot = seen.clone();
    handle.texture_mut().on_dispose(move |id| {
        *slot.lock().unwrap() = Some(id);
    });
    dispose_texture(&mut handle);

    assert_eq!(*seen.lock().unwrap(), Some(id));
}

#[test]
fn handles_get_unique_ids() {
    let a = construct_texture_from_data(vec![0u8; 4], 1, 1, PixelFormat::Rgba).unwrap();
    let b = construct_texture_from_data(vec![0u8; 4], 1, 1, PixelFormat::Rgba).unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn replace_data_flags_upload_and_bumps_version() {
    let mut handle = construct_texture_from_data(vec![0u8; 4], 1, 1, PixelFormat::Rgba).unwrap();
    assert_eq!(handle.version(), 1);

    handle.texture_mut().replace_data(vec![0.5f32; 4]).unwrap();
    assert_eq!(handle.version(), 2);
    assert_eq!(handle.sample_type(), SampleType::F32);
    assert!(handle.needs_upload());

    let err = handle.texture_mut().replace_data(vec![0u8; 2]).unwrap_err();
    assert!(matches!(err, Error::BufferTooSmall { expected: 4, actual: 2 }));
}

#[test]
fn replace_data_after_dispose_fails() {
    let mut handle = construct_texture_from_data(vec![0u8; 4], 1, 1, PixelFormat::Rgba).unwrap();
    dispose_texture(&mut handle);

    let err = handle.texture_mut().replace_data(vec![0u8; 4]).unwrap_err();
    assert!(matches!(err, Error::Disposed(id) if id == handle.id()));

    handle.texture_mut().set_needs_update();
    assert!(!handle.needs_upload());
}

#[test]
fn data_texture_from_image() {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        4,
        2,
        image::Rgb([10, 20, 30]),
    ));
    let texture = texbind::DataTexture::from_image(&img, Default::default()).unwrap();

    assert_eq!(texture.width(), 4);
    assert_eq!(texture.height(), 2);
    assert_eq!(texture.format(), PixelFormat::Rgba);
    assert_eq!(texture.data().map(|d| d.len()), Some(4 * 2 * 4));
    // Raw texture layer objects are not flagged until wrapped by the binding.
    assert!(!texture.needs_update());
}
