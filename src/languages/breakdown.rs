// Language byte breakdown.
// Turns GitHub's per-language byte counts into rounded percentages.

use crate::github::LanguageStat;

use super::colors::language_color;

/// Convert `(language, bytes)` pairs into display stats, keeping input order.
///
/// Each percentage is rounded half-up independently, so the total may drift
/// from 100 by up to `n - 1`. A repository with no bytes at all gets 0 for
/// every language.
pub fn language_breakdown(bytes: &[(String, u64)]) -> Vec<LanguageStat> {
    let total: u128 = bytes.iter().map(|(_, count)| u128::from(*count)).sum();

    bytes
        .iter()
        .map(|(name, count)| LanguageStat {
            name: name.clone(),
            color: language_color(name).to_string(),
            percentage: rounded_share(u128::from(*count), total),
        })
        .collect()
}

/// round(part / total * 100), half-up, in integer arithmetic.
fn rounded_share(part: u128, total: u128) -> u32 {
    if total == 0 {
        return 0;
    }
    // floor((200 * part + total) / (2 * total)) == floor(100 * part / total + 0.5)
    let share = (200 * part + total) / (2 * total);
    u32::try_from(share).unwrap_or(u32::MAX)
}
