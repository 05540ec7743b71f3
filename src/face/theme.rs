use crate::face::style::Rgb;

/// Built-in dial colours (Catppuccin Mocha), used when no override is configured.
pub struct Theme;

impl Theme {
    pub const RING: Rgb = Rgb(180, 190, 254);
    pub const BIG_SCALE: Rgb = Rgb(147, 153, 178);
    /// Small ticks share the big scale colour unless overridden.
    pub const SMALL_SCALE: Rgb = Self::BIG_SCALE;
    pub const HOUR_HAND: Rgb = Rgb(205, 214, 244);
    pub const MINUTE_HAND: Rgb = Rgb(137, 180, 250);
    pub const SECOND_HAND: Rgb = Rgb(243, 139, 168);
    pub const NUMBERS: Rgb = Rgb(186, 194, 222);
    /// Raster background (Mocha base).
    pub const BACKGROUND: Rgb = Rgb(30, 30, 46);
}
