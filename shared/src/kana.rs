//! Kana normalization for phonetic-name search
//!
//! The backend matches `kanaName` by exact canonical form, so every kana
//! search key is folded to full-width katakana before it is sent.

use unicode_normalization::UnicodeNormalization;

const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_END: u32 = 0x3096;
const HIRAGANA_TO_KATAKANA: u32 = 0x60;

/// Convert input to full-width katakana.
///
/// - NFKC first (half-width katakana become full-width)
/// - hiragana shifted into the katakana block
/// - everything outside the katakana block (U+30A0..U+30FF, which includes
///   `ー` and `・`) is dropped, except whitespace
/// - whitespace runs collapse to one space, ends trimmed
pub fn to_katakana(input: &str) -> String {
    let folded: String = input
        .nfkc()
        .map(|ch| {
            let cp = ch as u32;
            if (HIRAGANA_START..=HIRAGANA_END).contains(&cp) {
                char::from_u32(cp + HIRAGANA_TO_KATAKANA).unwrap_or(ch)
            } else {
                ch
            }
        })
        .filter(|ch| is_katakana(*ch) || ch.is_whitespace())
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_katakana(ch: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(to_katakana("たなか"), "タナカ");
        assert_eq!(to_katakana("がっこう"), "ガッコウ");
    }

    #[test]
    fn test_half_width_katakana() {
        assert_eq!(to_katakana("ﾀﾅｶ"), "タナカ");
        assert_eq!(to_katakana("ｶﾞｯｺｳ"), "ガッコウ");
    }

    #[test]
    fn test_non_kana_stripped() {
        assert_eq!(to_katakana("tanaka123"), "");
        assert_eq!(to_katakana("Ｔａｎａｋａ たろう 42"), "タロウ");
        assert_eq!(to_katakana("田中たろう"), "タロウ");
    }

    #[test]
    fn test_long_vowel_and_middle_dot_kept() {
        assert_eq!(to_katakana("すーぱー・まりお"), "スーパー・マリオ");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(to_katakana("  やまだ　　はなこ "), "ヤマダ ハナコ");
        assert_eq!(to_katakana(""), "");
    }

    #[test]
    fn test_katakana_is_fixed_point() {
        let once = to_katakana("さとう けんた");
        assert_eq!(to_katakana(&once), once);
    }
}
