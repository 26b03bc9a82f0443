//! Style resolution.

use alibi_core::{ComedicStyle, StyleChoice};
use rand::Rng;
use strum::IntoEnumIterator;

/// Resolve a style choice to a concrete comedic style.
///
/// An explicit choice passes through untouched. `Surprise` draws uniformly
/// from the full style set; the random source is injected so tests can pass
/// a seeded generator.
///
/// # Examples
///
/// ```
/// use alibi_core::{ComedicStyle, StyleChoice};
/// use alibi_prompt::resolve_style;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let style = resolve_style(StyleChoice::Explicit(ComedicStyle::Ironic), &mut rng);
/// assert_eq!(style, ComedicStyle::Ironic);
/// ```
pub fn resolve_style<R: Rng + ?Sized>(choice: StyleChoice, rng: &mut R) -> ComedicStyle {
    match choice {
        StyleChoice::Explicit(style) => style,
        StyleChoice::Surprise => {
            let styles: Vec<ComedicStyle> = ComedicStyle::iter().collect();
            styles[rng.gen_range(0..styles.len())]
        }
    }
}
