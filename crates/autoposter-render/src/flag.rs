//! Decorative country flags: a few stripes, discs and crosses per country, fixed colors.

use crate::model::{Color, FlagLayout, Rect, Shape};
use crate::theme::{FLAG_BORDER_COLOR, FLAG_HEIGHT, FLAG_WIDTH};
use autoposter_core::Country;

/// Flag box at `(x, y)` for a country name, or `None` when `country` is blank.
///
/// A name outside [`Country`] still gets the bordered box, just without a fill.
pub fn layout_flag(country: &str, x: f64, y: f64) -> Option<FlagLayout> {
    let name = country.trim();
    if name.is_empty() {
        return None;
    }
    let bounds = Rect::new(x, y, FLAG_WIDTH, FLAG_HEIGHT);
    let shapes = match name.parse::<Country>() {
        Ok(country) => flag_shapes(country, bounds),
        Err(_) => {
            tracing::debug!(country = name, "no flag pattern; drawing border only");
            Vec::new()
        }
    };
    Some(FlagLayout {
        country: name.to_string(),
        bounds,
        shapes,
        border: FLAG_BORDER_COLOR,
    })
}

fn rect(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Shape {
    Shape::Rect {
        rect: Rect::new(x, y, width, height),
        fill,
    }
}

fn horizontal_tricolor(b: Rect, colors: [Color; 3]) -> Vec<Shape> {
    let stripe = (b.height / 3.0).floor();
    vec![
        rect(b.x, b.y, b.width, stripe, colors[0]),
        rect(b.x, b.y + stripe, b.width, stripe, colors[1]),
        rect(b.x, b.y + 2.0 * stripe, b.width, b.height - 2.0 * stripe, colors[2]),
    ]
}

fn vertical_tricolor(b: Rect, colors: [Color; 3]) -> Vec<Shape> {
    let stripe = (b.width / 3.0).floor();
    vec![
        rect(b.x, b.y, stripe, b.height, colors[0]),
        rect(b.x + stripe, b.y, stripe, b.height, colors[1]),
        rect(b.x + 2.0 * stripe, b.y, b.width - 2.0 * stripe, b.height, colors[2]),
    ]
}

/// Centered cross of thickness `t`.
fn cross(b: Rect, cx: f64, cy: f64, t: f64, fill: Color) -> [Shape; 2] {
    let half = (t / 2.0).floor();
    [
        rect(cx - half, b.y, t, b.height, fill),
        rect(b.x, cy - half, b.width, t, fill),
    ]
}

pub fn flag_shapes(country: Country, b: Rect) -> Vec<Shape> {
    let (w, h) = (b.width, b.height);
    let cx = b.x + (w / 2.0).floor();
    let cy = b.y + (h / 2.0).floor();
    match country {
        Country::Germany => horizontal_tricolor(
            b,
            [
                Color::rgb(0, 0, 0),
                Color::rgb(221, 0, 0),
                Color::rgb(255, 206, 0),
            ],
        ),
        Country::Italy => vertical_tricolor(
            b,
            [
                Color::rgb(0, 146, 70),
                Color::rgb(241, 242, 241),
                Color::rgb(206, 43, 55),
            ],
        ),
        Country::France => vertical_tricolor(
            b,
            [
                Color::rgb(0, 35, 149),
                Color::rgb(255, 255, 255),
                Color::rgb(237, 41, 57),
            ],
        ),
        Country::Japan => vec![
            rect(b.x, b.y, w, h, Color::rgb(255, 255, 255)),
            Shape::Circle {
                cx,
                cy,
                r: (w.min(h) / 3.0).floor(),
                fill: Color::rgb(188, 0, 45),
            },
        ],
        Country::Usa => {
            let stripe = (h / 7.0).floor();
            let mut shapes: Vec<Shape> = (0..7u8)
                .map(|i| {
                    let fill = if i % 2 == 0 {
                        Color::rgb(178, 34, 52)
                    } else {
                        Color::rgb(255, 255, 255)
                    };
                    let top = b.y + f64::from(i) * stripe;
                    let height = if i == 6 { b.bottom() - top } else { stripe };
                    rect(b.x, top, w, height, fill)
                })
                .collect();
            shapes.push(rect(
                b.x,
                b.y,
                (w * 0.4).floor(),
                (h * 0.5).floor(),
                Color::rgb(60, 59, 110),
            ));
            shapes
        }
        Country::Uk => {
            let mut shapes = vec![rect(b.x, b.y, w, h, Color::rgb(1, 33, 105))];
            shapes.extend(cross(
                b,
                cx,
                cy,
                (w / 10.0).floor().max(2.0),
                Color::rgb(255, 255, 255),
            ));
            shapes.extend(cross(
                b,
                cx,
                cy,
                (w / 15.0).floor().max(1.0),
                Color::rgb(200, 16, 46),
            ));
            shapes
        }
        Country::Sweden => {
            let t = (w / 8.0).floor();
            let vx = b.x + (w * 5.0 / 16.0).floor();
            vec![
                rect(b.x, b.y, w, h, Color::rgb(0, 106, 167)),
                rect(vx, b.y, t, h, Color::rgb(254, 204, 0)),
                rect(b.x, cy - (t / 2.0).floor(), w, t, Color::rgb(254, 204, 0)),
            ]
        }
        Country::SouthKorea => {
            let r = (w.min(h) / 4.0).floor();
            let half = (r / 2.0).floor();
            let black = Color::rgb(0, 0, 0);
            vec![
                rect(b.x, b.y, w, h, Color::rgb(255, 255, 255)),
                Shape::Circle {
                    cx,
                    cy,
                    r,
                    fill: Color::rgb(205, 46, 58),
                },
                Shape::Circle {
                    cx,
                    cy: cy + half,
                    r: half,
                    fill: Color::rgb(0, 71, 160),
                },
                // Trigram corners.
                rect(b.x + 4.0, b.y + 4.0, 6.0, 4.0, black),
                rect(b.right() - 10.0, b.y + 4.0, 6.0, 4.0, black),
                rect(b.x + 4.0, b.bottom() - 8.0, 6.0, 4.0, black),
                rect(b.right() - 10.0, b.bottom() - 8.0, 6.0, 4.0, black),
            ]
        }
    }
}
