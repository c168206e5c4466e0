#![forbid(unsafe_code)]

//! Typed inline styles for banner nodes.
//!
//! Only the properties the dialog actually sets are modeled; everything is
//! optional and unset by default. [`Style::css`] renders the set properties
//! in declaration order as deterministic `property: value` text, which the
//! harness uses for previews and golden assertions.

use core::fmt;

/// CSS positioning scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// `position: fixed`, anchored to the viewport.
    Fixed,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("fixed"),
        }
    }
}

/// Layout mode of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    /// `display: flex`.
    Flex,
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flex => f.write_str("flex"),
        }
    }
}

/// Main axis of a flex container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlexDirection {
    /// Children laid out left to right.
    Row,
    /// Children stacked top to bottom.
    Column,
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// A CSS length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Unitless zero.
    Zero,
    /// Font-relative length in `rem`.
    Rem(f32),
    /// Percentage of the containing block.
    Percent(u16),
    /// `auto`, resolved by the layout engine.
    Auto,
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::Rem(v) => write!(f, "{v}rem"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// A named CSS color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(&'static str);

impl Color {
    /// `red`.
    pub const RED: Self = Self("red");

    /// A color by CSS name.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self(name)
    }

    /// The CSS color name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Inline style applied to a node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Positioning scheme.
    pub position: Option<Position>,
    /// Offset from the bottom edge.
    pub bottom: Option<Length>,
    /// Explicit width.
    pub width: Option<Length>,
    /// Upper bound on width.
    pub max_width: Option<Length>,
    /// Layout mode.
    pub display: Option<Display>,
    /// Flex main axis.
    pub flex_direction: Option<FlexDirection>,
    /// Gap between flex children.
    pub gap: Option<Length>,
    /// Block-axis padding.
    pub padding_block: Option<Length>,
    /// Inline-axis margin.
    pub margin_inline: Option<Length>,
    /// Background color.
    pub background: Option<Color>,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the positioning scheme.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the bottom offset.
    #[must_use]
    pub fn bottom(mut self, bottom: Length) -> Self {
        self.bottom = Some(bottom);
        self
    }

    /// Set the width.
    #[must_use]
    pub fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn max_width(mut self, max_width: Length) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Set the layout mode.
    #[must_use]
    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    /// Set the flex main axis.
    #[must_use]
    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    /// Set the gap between flex children.
    #[must_use]
    pub fn gap(mut self, gap: Length) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set the block-axis padding.
    #[must_use]
    pub fn padding_block(mut self, padding: Length) -> Self {
        self.padding_block = Some(padding);
        self
    }

    /// Set the inline-axis margin.
    #[must_use]
    pub fn margin_inline(mut self, margin: Length) -> Self {
        self.margin_inline = Some(margin);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render set properties in declaration order as `property: value` text.
    #[must_use]
    pub fn css(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        if let Some(v) = self.position {
            out.push(format!("position: {v}"));
        }
        if let Some(v) = self.bottom {
            out.push(format!("bottom: {v}"));
        }
        if let Some(v) = self.width {
            out.push(format!("width: {v}"));
        }
        if let Some(v) = self.max_width {
            out.push(format!("max-width: {v}"));
        }
        if let Some(v) = self.display {
            out.push(format!("display: {v}"));
        }
        if let Some(v) = self.flex_direction {
            out.push(format!("flex-direction: {v}"));
        }
        if let Some(v) = self.gap {
            out.push(format!("gap: {v}"));
        }
        if let Some(v) = self.padding_block {
            out.push(format!("padding-block: {v}"));
        }
        if let Some(v) = self.margin_inline {
            out.push(format!("margin-inline: {v}"));
        }
        if let Some(v) = self.background {
            out.push(format!("background-color: {v}"));
        }
        out.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_renders_nothing() {
        assert!(Style::new().is_empty());
        assert_eq!(Style::new().css(), "");
    }

    #[test]
    fn dialog_style_renders_in_declaration_order() {
        let style = Style::new()
            .position(Position::Fixed)
            .bottom(Length::Zero)
            .width(Length::Percent(100));
        assert_eq!(style.css(), "position: fixed; bottom: 0; width: 100%");
    }

    #[test]
    fn rem_lengths_format_without_trailing_zeros() {
        assert_eq!(Length::Rem(0.5).to_string(), "0.5rem");
        assert_eq!(Length::Rem(40.0).to_string(), "40rem");
    }

    #[test]
    fn background_color_uses_css_name() {
        let style = Style::new().background(Color::RED);
        assert_eq!(style.css(), "background-color: red");
        assert!(!style.is_empty());
    }
}
