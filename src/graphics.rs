//! Graphics support via embedded-graphics
//!
//! With the `graphics` feature, [`Display`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem using [`BinaryColor`]. Drawing only touches
//! the framebuffer and marks the affected pages dirty; call
//! [`Display::flush`] or [`Display::update`] to send them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use sh1107::{Builder, Dimensions, Display, I2cInterface};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let dims = match Dimensions::new(128, 128) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(I2cInterface::new(MockI2c), config);
//! let _ = display.initialize();
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(70, 60), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, OLED!",
//!     Point::new(10, 110),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//!
//! // Send only the pages that changed
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            // Pixels outside the panel are clipped
            let _ = self.set_pixel(x as u32, y as u32, color.is_on());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_buffer(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let (width, height) = self.config().rotated_size();
        Size::new(width as u32, height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions, Rotation};
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn write(&mut self, _register: u8, _payload: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display(rotation: Rotation) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .rotation(rotation)
            .build()
            .unwrap();
        Display::new(MockInterface, config)
    }

    #[test]
    fn test_size_follows_rotation() {
        assert_eq!(test_display(Rotation::Rotate0).size(), Size::new(128, 64));
        assert_eq!(test_display(Rotation::Rotate90).size(), Size::new(64, 128));
    }

    #[test]
    fn test_draw_marks_touched_pages() {
        let mut display = test_display(Rotation::Rotate0);
        Line::new(Point::new(0, 9), Point::new(127, 9))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();

        assert!(display.buffer()[128..256].iter().all(|b| *b == 0x02));
        let dirty: alloc::vec::Vec<u8> = display.dirty_pages().iter().collect();
        assert_eq!(dirty, [1]);
    }

    #[test]
    fn test_draw_clips_out_of_bounds() {
        let mut display = test_display(Rotation::Rotate0);
        Rectangle::new(Point::new(-10, -10), Size::new(200, 200))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert!(display.buffer().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_clear_fills_buffer() {
        let mut display = test_display(Rotation::Rotate0);
        display.clear(BinaryColor::On).unwrap();
        assert!(display.buffer().iter().all(|b| *b == 0xFF));
        assert_eq!(display.dirty_pages().iter().count(), 8);

        display.clear(BinaryColor::Off).unwrap();
        assert!(display.buffer().iter().all(|b| *b == 0x00));
    }
}
