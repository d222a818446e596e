#![cfg(feature = "host")]
//! Host-side PNG previews of rendered panel frames.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder, ScaledFloat};

use crate::frame::Frame;
use crate::layout::SerpentinePanel;

const PREVIEW_INVERSE_GAMMA: f32 = 2.2;

/// Render a strip-ordered `W`×`H` frame into a PNG sized to the requested
/// maximum dimension, one shaded dot per LED.
pub fn write_frame_png<const N: usize, const W: usize, const H: usize>(
    frame: &Frame<N>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<(), Box<dyn Error>> {
    assert!(W * H == N, "width * height must equal N");
    let output_path = output_path.as_ref();
    let cell_size = select_cell_size(W as u32, H as u32, target_max_dimension);
    let led_margin = (cell_size / 8).max(1);
    let (width, height, pixels) = panel_pixels::<N, W, H>(frame, cell_size, led_margin);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder.set_source_gamma(ScaledFloat::new(1.0));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    Ok(())
}

fn select_cell_size(panel_width: u32, panel_height: u32, target_max_dimension: u32) -> u32 {
    assert!(target_max_dimension > 0, "target_max_dimension must be positive");
    let mut cell_size = target_max_dimension;
    while cell_size > 1 {
        let led_margin = (cell_size / 8).max(1);
        let led_radius = (cell_size - (led_margin * 2)) / 2;
        let output_width = panel_width * cell_size + led_radius * 2;
        let output_height = panel_height * cell_size + led_radius * 2;
        if output_width.max(output_height) <= target_max_dimension {
            break;
        }
        cell_size -= 1;
    }
    cell_size
}

fn panel_pixels<const N: usize, const W: usize, const H: usize>(
    frame: &Frame<N>,
    cell_size: u32,
    led_margin: u32,
) -> (u32, u32, Vec<u8>) {
    assert!(cell_size > 0, "cell_size must be positive");
    assert!(led_margin < cell_size / 2, "led_margin must fit inside cell");
    let led_radius = (cell_size - (led_margin * 2)) / 2;
    assert!(led_radius > 0, "led_radius must be positive");
    let fade_width = (led_radius / 3).max(1);

    let border = led_radius;
    let width = (W as u32) * cell_size + border * 2;
    let height = (H as u32) * cell_size + border * 2;
    let mut bytes = vec![0u8; (width * height * 3 * 2) as usize];
    let center = (cell_size - 1) as i32 / 2;
    let led_radius_f = led_radius as f32;
    let inner_radius_f = (led_radius - fade_width) as f32;
    let radius_sq = (led_radius as i32) * (led_radius as i32);

    for row_index in 0..H {
        for column_index in 0..W {
            let pixel = frame[SerpentinePanel::<N, W, H>::pixel_index(column_index, row_index)];
            let cell_origin_x = (column_index as u32) * cell_size;
            let cell_origin_y = (row_index as u32) * cell_size;

            for local_y in 0..cell_size {
                let delta_y = local_y as i32 - center;
                for local_x in 0..cell_size {
                    let delta_x = local_x as i32 - center;
                    let distance_sq = delta_x * delta_x + delta_y * delta_y;
                    if distance_sq > radius_sq {
                        continue;
                    }
                    let distance = (distance_sq as f32).sqrt();
                    let intensity = if distance <= inner_radius_f {
                        1.0
                    } else {
                        let fade_span = led_radius_f - inner_radius_f;
                        (1.0 - (distance - inner_radius_f) / fade_span).max(0.0)
                    };
                    let x = border + cell_origin_x + local_x;
                    let y = border + cell_origin_y + local_y;
                    let pixel_index = ((y * width + x) * 3 * 2) as usize;
                    let red = linear_to_u16(inverse_gamma_to_linear(pixel.r) * intensity);
                    let green = linear_to_u16(inverse_gamma_to_linear(pixel.g) * intensity);
                    let blue = linear_to_u16(inverse_gamma_to_linear(pixel.b) * intensity);
                    bytes[pixel_index] = (red >> 8) as u8;
                    bytes[pixel_index + 1] = red as u8;
                    bytes[pixel_index + 2] = (green >> 8) as u8;
                    bytes[pixel_index + 3] = green as u8;
                    bytes[pixel_index + 4] = (blue >> 8) as u8;
                    bytes[pixel_index + 5] = blue as u8;
                }
            }
        }
    }

    (width, height, bytes)
}

fn inverse_gamma_to_linear(channel: u8) -> f32 {
    let normalized = (channel as f32) / 255.0;
    normalized.powf(PREVIEW_INVERSE_GAMMA)
}

fn linear_to_u16(value: f32) -> u16 {
    let clamped = value.clamp(0.0, 1.0);
    (clamped * 65535.0).round() as u16
}
