//! Rasterizes a display list onto a [`Framebuffer`].

use core::convert::Infallible;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::{Drawable, Primitive, Size};
use embedded_graphics::primitives::{CornerRadii, PrimitiveStyle, RoundedRectangle};
use embedded_graphics::text::{Baseline, Text as GlyphRun, TextStyleBuilder};
use snapshot_views::{DisplayList, PaintCommand};

use crate::framebuffer::Framebuffer;

/// Draw every command in order; later commands cover earlier ones.
pub fn rasterize(list: &DisplayList, target: &mut Framebuffer) {
    for command in list {
        draw_command(command, target);
    }
}

fn draw_command(command: &PaintCommand, target: &mut Framebuffer) {
    match command {
        PaintCommand::Fill { rect, color } => {
            infallible(rect.into_styled(PrimitiveStyle::with_fill(*color)).draw(target));
        }
        PaintCommand::RoundedFill {
            rect,
            top_radius,
            bottom_radius,
            color,
        } => {
            let top = Size::new(*top_radius, *top_radius);
            let bottom = Size::new(*bottom_radius, *bottom_radius);
            let radii = CornerRadii {
                top_left: top,
                top_right: top,
                bottom_right: bottom,
                bottom_left: bottom,
            };
            infallible(
                RoundedRectangle::new(*rect, radii)
                    .into_styled(PrimitiveStyle::with_fill(*color))
                    .draw(target),
            );
        }
        PaintCommand::Dim {
            rect,
            color,
            opacity,
        } => target.blend_rect(*rect, *color, *opacity),
        PaintCommand::Text {
            origin,
            text,
            font,
            color,
        } => {
            let character_style = MonoTextStyle::new(font.mono(), *color);
            let text_style = TextStyleBuilder::new().baseline(Baseline::Top).build();
            infallible(
                GlyphRun::with_text_style(text, *origin, character_style, text_style)
                    .draw(target)
                    .map(|_| ()),
            );
        }
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
