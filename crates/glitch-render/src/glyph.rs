//! Vector glyph paths
//!
//! Glyphs are drawn as stroked line figures rather than rasterized font
//! glyphs; the effect reads at a glance and needs no font pipeline. Latin
//! letters, digits and box/shade characters get explicit figures, everything
//! else (katakana, symbols) falls back to a deterministic stroke pattern
//! derived from the code point, so a given character always draws the same.

use vello::kurbo::{BezPath, Circle, Point, Shape};

use glitch_core::rand::hash;

/// Build the stroke path for `ch`, centered on `center`
///
/// `width`/`height` are the cell metrics; the figure is inset to roughly
/// 70% x 80% of the cell like a terminal glyph.
pub fn glyph_path(ch: char, center: Point, width: f64, height: f64) -> BezPath {
    let w = width * 0.7;
    let h = height * 0.8;
    let x = center.x - w / 2.0;
    let y = center.y - h / 2.0;

    let mut path = BezPath::new();
    let at = |fx: f64, fy: f64| Point::new(x + w * fx, y + h * fy);

    match ch.to_ascii_uppercase() {
        'A' => {
            path.move_to(at(0.0, 1.0));
            path.line_to(at(0.5, 0.0));
            path.line_to(at(1.0, 1.0));
            path.move_to(at(0.2, 0.6));
            path.line_to(at(0.8, 0.6));
        }
        'C' => {
            path.move_to(at(1.0, 0.2));
            path.line_to(at(0.3, 0.0));
            path.line_to(at(0.0, 0.3));
            path.line_to(at(0.0, 0.7));
            path.line_to(at(0.3, 1.0));
            path.line_to(at(1.0, 0.8));
        }
        'E' => {
            path.move_to(at(1.0, 0.0));
            path.line_to(at(0.0, 0.0));
            path.line_to(at(0.0, 1.0));
            path.line_to(at(1.0, 1.0));
            path.move_to(at(0.0, 0.5));
            path.line_to(at(0.7, 0.5));
        }
        'H' => {
            path.move_to(at(0.0, 0.0));
            path.line_to(at(0.0, 1.0));
            path.move_to(at(1.0, 0.0));
            path.line_to(at(1.0, 1.0));
            path.move_to(at(0.0, 0.5));
            path.line_to(at(1.0, 0.5));
        }
        'I' => {
            path.move_to(at(0.2, 0.0));
            path.line_to(at(0.8, 0.0));
            path.move_to(at(0.5, 0.0));
            path.line_to(at(0.5, 1.0));
            path.move_to(at(0.2, 1.0));
            path.line_to(at(0.8, 1.0));
        }
        'T' => {
            path.move_to(at(0.0, 0.0));
            path.line_to(at(1.0, 0.0));
            path.move_to(at(0.5, 0.0));
            path.line_to(at(0.5, 1.0));
        }
        'X' => {
            path.move_to(at(0.0, 0.0));
            path.line_to(at(1.0, 1.0));
            path.move_to(at(1.0, 0.0));
            path.line_to(at(0.0, 1.0));
        }
        'O' | '0' => {
            path.move_to(at(0.3, 0.0));
            path.line_to(at(0.0, 0.3));
            path.line_to(at(0.0, 0.7));
            path.line_to(at(0.3, 1.0));
            path.line_to(at(0.7, 1.0));
            path.line_to(at(1.0, 0.7));
            path.line_to(at(1.0, 0.3));
            path.line_to(at(0.7, 0.0));
            path.close_path();
        }
        '1' => {
            path.move_to(at(0.3, 0.2));
            path.line_to(at(0.5, 0.0));
            path.line_to(at(0.5, 1.0));
            path.move_to(at(0.2, 1.0));
            path.line_to(at(0.8, 1.0));
        }
        // Full and half blocks: closed outlines, filled by stroke density
        '█' | '■' => {
            path.move_to(at(0.0, 0.0));
            path.line_to(at(1.0, 0.0));
            path.line_to(at(1.0, 1.0));
            path.line_to(at(0.0, 1.0));
            path.close_path();
            path.move_to(at(0.0, 0.5));
            path.line_to(at(1.0, 0.5));
        }
        '▀' => {
            path.move_to(at(0.0, 0.0));
            path.line_to(at(1.0, 0.0));
            path.line_to(at(1.0, 0.5));
            path.line_to(at(0.0, 0.5));
            path.close_path();
        }
        '▄' => {
            path.move_to(at(0.0, 0.5));
            path.line_to(at(1.0, 0.5));
            path.line_to(at(1.0, 1.0));
            path.line_to(at(0.0, 1.0));
            path.close_path();
        }
        '▌' => {
            path.move_to(at(0.0, 0.0));
            path.line_to(at(0.5, 0.0));
            path.line_to(at(0.5, 1.0));
            path.line_to(at(0.0, 1.0));
            path.close_path();
        }
        '▐' => {
            path.move_to(at(0.5, 0.0));
            path.line_to(at(1.0, 0.0));
            path.line_to(at(1.0, 1.0));
            path.line_to(at(0.5, 1.0));
            path.close_path();
        }
        // Shade characters and small dots: dot lattices of falling density
        '▓' | '▒' | '░' | '·' | '.' | ':' | '°' | '∙' | '○' | '●' => {
            let radius = match ch {
                '▓' => w * 0.16,
                '▒' => w * 0.12,
                '●' | '○' => w * 0.3,
                _ => w * 0.08,
            };
            let spots: &[(f64, f64)] = match ch {
                '▓' | '▒' | '░' => &[(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)],
                ':' => &[(0.5, 0.25), (0.5, 0.75)],
                '°' => &[(0.5, 0.2)],
                _ => &[(0.5, 0.5)],
            };
            for &(fx, fy) in spots {
                let c = at(fx, fy);
                path.move_to(Point::new(c.x + radius, c.y));
                path.extend(Circle::new(c, radius).path_elements(0.1));
            }
        }
        other => {
            // Deterministic fallback strokes keyed by code point
            match hash(other as u32) % 6 {
                0 => {
                    path.move_to(at(0.0, 0.0));
                    path.line_to(at(1.0, 1.0));
                }
                1 => {
                    path.move_to(at(0.5, 0.0));
                    path.line_to(at(0.5, 1.0));
                    path.move_to(at(0.0, 0.5));
                    path.line_to(at(1.0, 0.5));
                }
                2 => {
                    path.move_to(at(0.0, 0.0));
                    path.line_to(at(1.0, 0.0));
                    path.move_to(at(0.0, 1.0));
                    path.line_to(at(1.0, 1.0));
                    path.move_to(at(0.5, 0.0));
                    path.line_to(at(0.5, 1.0));
                }
                3 => {
                    path.move_to(at(0.2, 0.0));
                    path.line_to(at(0.2, 1.0));
                    path.move_to(at(0.8, 0.0));
                    path.line_to(at(0.8, 1.0));
                }
                4 => {
                    path.move_to(at(0.0, 0.0));
                    path.line_to(at(0.0, 1.0));
                    path.line_to(at(1.0, 1.0));
                }
                _ => {
                    path.move_to(at(0.0, 0.0));
                    path.line_to(at(1.0, 1.0));
                    path.move_to(at(1.0, 0.0));
                    path.line_to(at(0.0, 1.0));
                }
            }
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(50.0, 50.0);

    #[test]
    fn test_every_bundled_charset_char_has_a_path() {
        for def in glitch_theme::ALL_THEMES {
            for ch in def.charset.chars() {
                let path = glyph_path(ch, CENTER, 10.0, 20.0);
                assert!(
                    !path.elements().is_empty(),
                    "{}: '{}' produced an empty path",
                    def.name,
                    ch
                );
            }
        }
    }

    #[test]
    fn test_same_char_same_path() {
        let a = glyph_path('ツ', CENTER, 10.0, 20.0);
        let b = glyph_path('ツ', CENTER, 10.0, 20.0);
        assert_eq!(a.elements(), b.elements());
    }

    #[test]
    fn test_path_stays_near_cell() {
        for ch in ['A', '█', '░', 'ナ', '?'] {
            let bbox = glyph_path(ch, CENTER, 10.0, 20.0).bounding_box();
            assert!(bbox.x0 >= 40.0 && bbox.x1 <= 60.0, "'{}' x out of cell", ch);
            assert!(bbox.y0 >= 38.0 && bbox.y1 <= 62.0, "'{}' y out of cell", ch);
        }
    }
}
