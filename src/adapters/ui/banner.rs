//! Welcome banner: figlet title painted left-to-right across a colour palette.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

type Rgb = (u8, u8, u8);

/// Evenly spaced colour stops. Needs at least one stop.
pub struct Palette(&'static [Rgb]);

/// Violet (#6a11cb) to azure (#2575fc), the event list background.
pub const EVENTS_PALETTE: Palette = Palette(&[(0x6a, 0x11, 0xcb), (0x25, 0x75, 0xfc)]);

impl Palette {
    /// Colour at `pos` in `[0, span)`, blended between the two nearest stops.
    fn at(&self, pos: usize, span: usize) -> Rgb {
        let stops = self.0;
        if stops.len() < 2 || span < 2 {
            return stops.first().copied().unwrap_or((0xff, 0xff, 0xff));
        }
        let scaled = pos.min(span - 1) as f64 * (stops.len() - 1) as f64 / (span - 1) as f64;
        let i = (scaled.floor() as usize).min(stops.len() - 2);
        let t = scaled - i as f64;
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        let (a, b) = (stops[i], stops[i + 1]);
        (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }

    fn last(&self) -> Rgb {
        self.0.last().copied().unwrap_or((0xff, 0xff, 0xff))
    }
}

fn render_art() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    Some(font.convert("EVENTS")?.to_string())
}

/// Prints `art` with each column coloured by its horizontal position.
fn paint(out: &mut impl Write, art: &str, palette: &Palette) {
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    for line in art.lines() {
        for (col, ch) in line.chars().enumerate() {
            let (r, g, b) = palette.at(col, width);
            let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
            let _ = out.execute(Print(ch));
        }
        let _ = out.execute(ResetColor);
        let _ = out.execute(Print("\r\n"));
    }
}

/// Prints the title banner and version. Falls back to plain text if figlet fails.
pub fn print_welcome() {
    let mut out = stdout();
    let art = render_art().unwrap_or_else(|| "COMMUNITY EVENTS".to_string());
    paint(&mut out, &art, &EVENTS_PALETTE);

    let (r, g, b) = EVENTS_PALETTE.last();
    let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
    let _ = out.execute(Print(format!("v{}\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
