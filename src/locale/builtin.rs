//! Built-in locale data.

/// Locale settings for Arabic rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Hijri month names, Muharram first.
    pub hijri_month_names: [&'static str; 12],
    /// Suffix marking a Hijri year.
    pub era_suffix: &'static str,
    /// Counted-unit words, indexed by `[TimeUnit][Agreement]`.
    pub unit_words: [[&'static str; 4]; 3],
}

impl Default for Locale {
    fn default() -> Self {
        Self::ar_sa()
    }
}

impl Locale {
    /// Saudi Arabic locale.
    pub fn ar_sa() -> Self {
        Locale {
            hijri_month_names: [
                "محرم",
                "صفر",
                "ربيع الأول",
                "ربيع الثاني",
                "جمادى الأولى",
                "جمادى الثانية",
                "رجب",
                "شعبان",
                "رمضان",
                "شوال",
                "ذو القعدة",
                "ذو الحجة",
            ],
            era_suffix: "هـ",
            unit_words: [
                // day: singular, dual, 3-10, 11+
                ["يوم", "يومان", "أيام", "يوما"],
                // hour
                ["ساعة", "ساعات", "ساعات", "ساعة"],
                // minute
                ["دقيقة", "دقيقتان", "دقائق", "دقيقة"],
            ],
        }
    }

    /// Returns the name of Hijri month `month` (1-12), or `None` outside
    /// that range.
    pub fn hijri_month_name(&self, month: u32) -> Option<&'static str> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        self.hijri_month_names.get(idx).copied()
    }
}
