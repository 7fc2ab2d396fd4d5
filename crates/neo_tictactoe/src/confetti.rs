//! Confetti scattered over the board after a win.

use rand::Rng;
use tracing::instrument;

/// Glyphs cycled through by successive pieces.
pub const CONFETTI_GLYPHS: [&str; 8] = ["🎉", "🎊", "✨", "🪅", "💥", "🥳", "🎈", "🌟"];

/// Pieces scattered per celebration.
pub const CONFETTI_PIECES: usize = 16;

/// One piece of confetti. Coordinates are percentages of the play area.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Glyph shown.
    pub glyph: &'static str,
    /// Fall variant, 1-4.
    pub variant: u8,
    /// Horizontal placement, 10-90 %.
    pub x_percent: f32,
    /// Vertical placement, 10-90 %.
    pub y_percent: f32,
    /// Rotation, 0-360 degrees.
    pub rotation_deg: f32,
}

/// Scatters [`CONFETTI_PIECES`] pieces using `rng`.
#[instrument(skip(rng))]
pub fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Vec<ConfettiPiece> {
    (0..CONFETTI_PIECES)
        .map(|i| ConfettiPiece {
            glyph: CONFETTI_GLYPHS[i % CONFETTI_GLYPHS.len()],
            variant: (i % 4) as u8 + 1,
            x_percent: rng.gen_range(10.0..90.0),
            y_percent: rng.gen_range(10.0..90.0),
            rotation_deg: rng.gen_range(0.0..360.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scatter_layout() {
        let pieces = scatter(&mut StdRng::seed_from_u64(7));
        assert_eq!(pieces.len(), CONFETTI_PIECES);
        assert_eq!(pieces[0].glyph, "🎉");
        assert_eq!(pieces[9].glyph, "🎊");
        assert_eq!(pieces[5].variant, 2);
        for piece in &pieces {
            assert!((10.0..90.0).contains(&piece.x_percent));
            assert!((10.0..90.0).contains(&piece.y_percent));
            assert!((0.0..360.0).contains(&piece.rotation_deg));
            assert!((1..=4).contains(&piece.variant));
        }
    }

    #[test]
    fn test_scatter_is_deterministic_per_seed() {
        let a = scatter(&mut StdRng::seed_from_u64(42));
        let b = scatter(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
