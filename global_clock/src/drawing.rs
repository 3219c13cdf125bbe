//! Drawing module - analog face, sword hands and digital readout
//!
//! Renders the clock over the city background using nannou's Draw API. All
//! angles arrive in degrees clockwise from 12 o'clock; `hand_vector` supplies
//! the draw-space correction and this module only flips y for nannou's y-up
//! coordinates.

use nannou::prelude::*;
use nannou::wgpu;

use shared::{hand_vector, marker_radius, HandAngles, TimeData};

/// Color palette carried over from the original hand styling
pub mod colors {
    use nannou::prelude::*;

    /// Cornflower blue
    pub const HOUR_HAND: Srgb<u8> = Srgb {
        red: 100,
        green: 149,
        blue: 237,
        standard: std::marker::PhantomData,
    };
    /// Slate gray
    pub const MINUTE_HAND: Srgb<u8> = Srgb {
        red: 112,
        green: 128,
        blue: 144,
        standard: std::marker::PhantomData,
    };
    /// Light coral
    pub const SECOND_HAND: Srgb<u8> = Srgb {
        red: 240,
        green: 128,
        blue: 128,
        standard: std::marker::PhantomData,
    };
    pub const MARKER: Srgb<u8> = Srgb {
        red: 235,
        green: 235,
        blue: 235,
        standard: std::marker::PhantomData,
    };
    pub const DIGITAL_TEXT: Srgb<u8> = Srgb {
        red: 30,
        green: 30,
        blue: 30,
        standard: std::marker::PhantomData,
    };
    pub const BACKDROP: Srgb<u8> = Srgb {
        red: 20,
        green: 20,
        blue: 24,
        standard: std::marker::PhantomData,
    };
}

/// Multiply each channel by `factor`, saturating at white
fn shade(color: Srgb<u8>, factor: f32) -> Srgb<u8> {
    let scale = |c: u8| ((c as f32 * factor).min(255.0)) as u8;
    Srgb {
        red: scale(color.red),
        green: scale(color.green),
        blue: scale(color.blue),
        standard: std::marker::PhantomData,
    }
}

/// Per-frame render geometry, a function of window size only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub half_width: f32,
    pub half_height: f32,
    pub second_radius: f32,
    pub minute_radius: f32,
    pub hour_radius: f32,
    pub digit_radius: f32,
}

impl Layout {
    pub fn calculate(rect: Rect) -> Self {
        let half_width = rect.w() / 2.0;
        let half_height = rect.h() / 2.0;
        let radius = half_height - 50.0;
        Self {
            half_width,
            half_height,
            second_radius: radius - 100.0,
            minute_radius: radius - 150.0,
            hour_radius: radius - 250.0,
            digit_radius: radius - 30.0,
        }
    }

    /// Side of the square the analog skin texture is stretched into
    pub fn skin_size(&self) -> f32 {
        self.half_width.min(self.half_height) * 2.0 * 0.8
    }
}

/// Face-center offset for a hand angle, in nannou's y-up space
fn face_point(angle_deg: f64, radius: f32) -> Point2 {
    let (dx, dy) = hand_vector(angle_deg, radius as f64);
    pt2(dx as f32, -dy as f32)
}

/// Draw the 60 face markers: hour ticks largest, five-minute ticks medium
pub fn draw_analog_face(draw: &Draw, layout: &Layout) {
    for i in 0..60u32 {
        let angle = <f64 as From<u32>>::from(i) * 6.0;
        draw.ellipse()
            .xy(face_point(angle, layout.digit_radius))
            .radius(marker_radius(i))
            .color(colors::MARKER);
    }
}

/// Draw a sword-shaped hand: a closed five-point blade with a brighter spine
fn draw_sword_hand(
    draw: &Draw,
    color: Srgb<u8>,
    angle_deg: f64,
    length: f32,
    base_width: f32,
    tip_length: f32,
) {
    let rad = (angle_deg as f32).to_radians();
    // Unit vector along the hand and its rightward perpendicular, y-up
    let dir = vec2(rad.sin(), rad.cos());
    let perp = vec2(rad.cos(), -rad.sin());

    let base_half = base_width / 2.0;
    let shoulder = length - tip_length;
    let blade = [
        (-base_half, 0.0),
        (-base_half * 0.3, shoulder),
        (0.0, length),
        (base_half * 0.3, shoulder),
        (base_half, 0.0),
    ];
    let points = blade
        .iter()
        .map(|&(across, along)| perp * across + dir * along);

    draw.polygon()
        .stroke(shade(color, 0.8))
        .stroke_weight(1.0)
        .color(color)
        .points(points);

    draw.line()
        .start(pt2(0.0, 0.0))
        .end(dir * (length * 0.7))
        .color(shade(color, 1.3))
        .weight(2.0);
}

/// Draw the complete analog clock: markers, three sword hands and the hub
pub fn draw_analog_clock(draw: &Draw, angles: &HandAngles, layout: &Layout) {
    draw_analog_face(draw, layout);

    draw_sword_hand(
        draw,
        colors::HOUR_HAND,
        angles.hour_deg,
        layout.hour_radius,
        16.0,
        40.0,
    );
    draw_sword_hand(
        draw,
        colors::MINUTE_HAND,
        angles.minute_deg,
        layout.minute_radius,
        12.0,
        50.0,
    );
    draw_sword_hand(
        draw,
        colors::SECOND_HAND,
        angles.second_deg,
        layout.second_radius,
        6.0,
        30.0,
    );

    draw.ellipse()
        .x_y(0.0, 0.0)
        .radius(8.0)
        .color(colors::HOUR_HAND)
        .stroke(WHITE)
        .stroke_weight(2.0);
}

/// Frame box the digital style image is fitted into
const DIGITAL_FRAME_W: f32 = 600.0;
const DIGITAL_FRAME_H: f32 = 300.0;

/// Draw the digital readout centered in the window, over its style frame
pub fn draw_digital_clock(draw: &Draw, time_data: &TimeData, frame: Option<&wgpu::Texture>) {
    if let Some(texture) = frame {
        let [w, h] = texture.size();
        let scale = (DIGITAL_FRAME_W / w as f32).min(DIGITAL_FRAME_H / h as f32);
        draw.texture(texture)
            .x_y(0.0, 0.0)
            .w_h(w as f32 * scale, h as f32 * scale);
    }

    draw.text(&time_data.format_time())
        .x_y(0.0, 0.0)
        .w(DIGITAL_FRAME_W)
        .font_size(96)
        .color(colors::DIGITAL_TEXT);
}

/// Draw the analog skin texture stretched into a centered square
pub fn draw_analog_skin(draw: &Draw, texture: &wgpu::Texture, layout: &Layout) {
    let size = layout.skin_size();
    draw.texture(texture).x_y(0.0, 0.0).w_h(size, size);
}

/// Draw the city background scaled keep-aspect-by-expanding to the window
pub fn draw_background(draw: &Draw, texture: &wgpu::Texture, window: Rect) {
    let [w, h] = texture.size();
    let scale = (window.w() / w as f32).max(window.h() / h as f32);
    draw.texture(texture)
        .x_y(0.0, 0.0)
        .w_h(w as f32 * scale, h as f32 * scale);
}
