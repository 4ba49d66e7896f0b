use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Pixel sizes generated on every run, in output order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Edge length of the design every other dimension is scaled from.
const REFERENCE_SIZE: f64 = 128.0;

const DISC_RATIO: f64 = 0.47;
const HOUR_HAND_LENGTH: f64 = 32.0;
const HOUR_HAND_WIDTH: f64 = 5.0;
const MINUTE_HAND_LENGTH: f64 = 24.0;
const MINUTE_HAND_WIDTH: f64 = 4.0;
const DOT_RADIUS: f64 = 5.0;

/// #667eea
pub const BACKGROUND: (u8, u8, u8) = (102, 126, 234);
pub const FOREGROUND: (u8, u8, u8) = (255, 255, 255);

/// Integer geometry of one icon. All values truncate toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub center: u32,
    pub radius: u32,
    pub hour_length: u32,
    pub hour_width: u32,
    pub minute_length: u32,
    pub minute_width: u32,
    pub dot_radius: u32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> IconGeometry {
        let scale = f64::from(size) / REFERENCE_SIZE;
        let scaled = |v: f64| (v * scale) as u32;

        IconGeometry {
            size,
            center: size / 2,
            radius: (f64::from(size) * DISC_RATIO) as u32,
            hour_length: scaled(HOUR_HAND_LENGTH),
            hour_width: scaled(HOUR_HAND_WIDTH).max(1),
            minute_length: scaled(MINUTE_HAND_LENGTH),
            minute_width: scaled(MINUTE_HAND_WIDTH).max(1),
            dot_radius: scaled(DOT_RADIUS).max(2),
        }
    }

    /// Inclusive pixel bounds `(left, top, right, bottom)` of the background disc.
    pub fn disc_bounds(&self) -> (i64, i64, i64, i64) {
        let c = i64::from(self.center);
        let r = i64::from(self.radius);
        (c - r, c - r, c + r, c + r)
    }
}

/// Renders the clock glyph at `size` x `size` pixels.
///
/// `size` must be non-zero.
pub fn render(size: u32) -> Pixmap {
    debug_assert!(size > 0, "icon size must be positive");

    let geometry = IconGeometry::for_size(size);
    log::debug!(
        "rendering icon{}: {:?}, disc bounds {:?}",
        size,
        geometry,
        geometry.disc_bounds()
    );

    let mut pixmap = Pixmap::new(size, size).expect("icon size must be positive");

    // Integer pixel `p` spans [p, p + 1); shapes are positioned on pixel centers.
    let origin = geometry.center as f32 + 0.5;

    fill_disc(&mut pixmap, origin, geometry.radius, BACKGROUND);

    stroke_segment(
        &mut pixmap,
        (origin, origin),
        (origin, origin - geometry.hour_length as f32),
        geometry.hour_width,
    );
    stroke_segment(
        &mut pixmap,
        (origin, origin),
        (origin + geometry.minute_length as f32, origin),
        geometry.minute_width,
    );

    fill_disc(&mut pixmap, origin, geometry.dot_radius, FOREGROUND);

    pixmap
}

fn solid_paint((r, g, b): (u8, u8, u8)) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = false;
    paint
}

/// Fills a disc covering pixels `center - radius ..= center + radius` on both axes.
fn fill_disc(pixmap: &mut Pixmap, origin: f32, radius: u32, color: (u8, u8, u8)) {
    let path = match PathBuilder::from_circle(origin, origin, radius as f32 + 0.5) {
        Some(path) => path,
        None => return,
    };

    pixmap.fill_path(
        &path,
        &solid_paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn stroke_segment(pixmap: &mut Pixmap, from: (f32, f32), to: (f32, f32), width: u32) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.0, from.1);
    pb.line_to(to.0, to.1);
    // The minute hand truncates to zero length below 6 px, the hour hand below 4 px.
    let path = match pb.finish() {
        Some(path) => path,
        None => return,
    };

    let stroke = Stroke {
        width: width as f32,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    };

    pixmap.stroke_path(
        &path,
        &solid_paint(FOREGROUND),
        &stroke,
        Transform::identity(),
        None,
    );
}
