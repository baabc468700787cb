//! Miscellaneous helper utilities.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize `tracing` subscriber with env-based filter.
///
/// If `RUST_LOG` is not set, defaults to `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Render a monetary amount as a currency prefix plus two fixed decimals.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Human-friendly label for a niche key: underscores become spaces and the
/// first letter of each word is upper-cased ("how_to_finance" becomes
/// "How To Finance").
pub fn display_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut label = String::with_capacity(spaced.len());
    let mut at_boundary = true;
    for ch in spaced.chars() {
        if at_boundary {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
        at_boundary = !ch.is_alphanumeric();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_with_prefix_and_two_decimals() {
        assert_eq!(format_money(16.5), "$16.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.567), "$1234.57");
    }

    #[test]
    fn labels_space_and_title_case_keys() {
        assert_eq!(display_label("tech"), "Tech");
        assert_eq!(display_label("how_to_finance"), "How To Finance");
        assert_eq!(display_label("3d_printing"), "3d Printing");
        assert_eq!(display_label(""), "");
    }
}
