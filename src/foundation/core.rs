/// Zero-based position of a frame (input row) in the captured timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The index following this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Straight 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Black; the default canvas background.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Dark grey used between tiles.
    pub const GUTTER: Self = Self::new(32, 32, 32);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, saturating each channel into `0..=255`.
    pub fn saturating_from_i64(r: i64, g: i64, b: i64) -> Self {
        fn channel(v: i64) -> u8 {
            u8::try_from(v.clamp(0, 255)).unwrap_or(u8::MAX)
        }
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self::new(r, g, b)
    }
}

/// One captured snapshot of every LED on the strip, in strip order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    leds: Vec<Rgb8>,
}

impl Frame {
    /// Wrap a list of LED colors.
    pub fn new(leds: Vec<Rgb8>) -> Self {
        Self { leds }
    }

    /// A frame of `num_leds` copies of `color`.
    pub fn solid(num_leds: usize, color: Rgb8) -> Self {
        Self::new(vec![color; num_leds])
    }

    /// Number of LEDs captured in this frame.
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    /// `true` when the frame holds no LEDs.
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Color of LED `idx`, if captured.
    pub fn led(&self, idx: usize) -> Option<Rgb8> {
        self.leds.get(idx).copied()
    }

    /// All LED colors in strip order.
    pub fn leds(&self) -> &[Rgb8] {
        &self.leds
    }
}
