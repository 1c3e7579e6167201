use anyhow::{Context, Result};
use sheen_engine::coords::Rect;
use sheen_engine::logging::{LoggingConfig, init_logging};
use sheen_engine::paint::{Brush, BrushKind, BrushResolver, BrushUnits, GradientError, Paint};
use sheen_engine::render::GradientUniform;

/// Red → transparent blue, then positions 0 and 1.
const SUNSET: [f32; 10] = [
    1.0, 0.3, 0.1, 1.0, //
    0.1, 0.2, 0.9, 0.0, //
    0.0, 1.0,
];

struct Sample {
    name: &'static str,
    brush: Brush,
    bbox: Rect,
}

fn object_bbox(kind: BrushKind, points: &[&str]) -> Brush {
    Brush::new(kind, points.iter().copied(), BrushUnits::ObjectBoundingBox)
        .with_gradient_colors(SUNSET)
}

fn samples() -> Vec<Sample> {
    vec![
        Sample {
            name: "horizontal linear",
            brush: object_bbox(BrushKind::LinearGradient, &["0%", "0%", "100%", "0%"]),
            bbox: Rect::new(10.0, 20.0, 100.0, 50.0),
        },
        Sample {
            name: "user-space diagonal",
            brush: Brush::new(
                BrushKind::LinearGradient,
                ["0", "0", "120", "80"],
                BrushUnits::UserSpaceOnUse,
            )
            .with_user_space_bounding_box(Rect::from_ltrb(0.0, 0.0, 240.0, 160.0))
            .with_gradient_colors(SUNSET),
            bbox: Rect::new(40.0, 40.0, 200.0, 120.0),
        },
        Sample {
            name: "elliptical radial",
            brush: object_bbox(
                BrushKind::RadialGradient,
                &["50%", "50%", "50", "25", "50%", "50%"],
            ),
            bbox: Rect::new(0.0, 0.0, 100.0, 100.0),
        },
        Sample {
            name: "collapsed radial",
            brush: object_bbox(
                BrushKind::RadialGradient,
                &["0", "0", "0%", "50%", "50%", "50%"],
            ),
            bbox: Rect::new(0.0, 0.0, 100.0, 100.0),
        },
        Sample {
            name: "pattern",
            brush: object_bbox(BrushKind::Pattern, &[]),
            bbox: Rect::new(0.0, 0.0, 64.0, 64.0),
        },
    ]
}

fn describe(paint: &Paint) -> String {
    match paint {
        Paint::None => "no-op fill".to_owned(),
        Paint::LinearGradient(g) => format!(
            "linear ({:.1}, {:.1}) -> ({:.1}, {:.1}), {} stops",
            g.start.x,
            g.start.y,
            g.end.x,
            g.end.y,
            g.stops.len()
        ),
        Paint::RadialGradient(g) => {
            let c = g.device_center();
            format!(
                "radial r={:.1} at ({:.1}, {:.1}), y-scale {:.2}, {} stops",
                g.radius,
                c.x,
                c.y,
                g.local_transform().sy,
                g.stops.len()
            )
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scale = 2.0;
    let opacity = 0.8;

    for sample in samples() {
        match sample.brush.resolve(sample.bbox, scale, opacity) {
            Ok(paint) => {
                let uniform = GradientUniform::from_paint(&paint);
                log::info!(
                    "{:<20} {} ({} uniform bytes)",
                    sample.name,
                    describe(&paint),
                    uniform.as_bytes().len()
                );
                for stop in paint.stops() {
                    log::debug!("{:<20}   t={:.2} #{:08x}", "", stop.t, stop.color.to_argb_u32());
                }
            }
            // Caller policy: skip the fill.
            Err(err @ GradientError::DegenerateRadius { .. }) => {
                log::warn!("{:<20} skipped: {err}", sample.name);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("resolving sample {:?}", sample.name));
            }
        }
    }

    Ok(())
}
