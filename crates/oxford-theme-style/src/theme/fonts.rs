//! Font size table and scaling.

/// Font sizes in points for each text role the theme controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// Base text size (`font.size`).
    pub font: f64,
    /// Axis labels (`axes.labelsize`).
    pub axes_label: f64,
    /// Axes titles (`axes.titlesize`).
    pub axes_title: f64,
    /// X tick labels (`xtick.labelsize`).
    pub xtick_label: f64,
    /// Y tick labels (`ytick.labelsize`).
    pub ytick_label: f64,
    /// Legend entries (`legend.fontsize`).
    pub legend: f64,
    /// Figure suptitle (`figure.titlesize`).
    pub figure_title: f64,
}

impl FontSizes {
    /// Multiply every size by `factor`, rounding each to two decimals.
    ///
    /// Rounding is half away from zero, so the result is the same on every
    /// platform and every call.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            font: scale(self.font, factor),
            axes_label: scale(self.axes_label, factor),
            axes_title: scale(self.axes_title, factor),
            xtick_label: scale(self.xtick_label, factor),
            ytick_label: scale(self.ytick_label, factor),
            legend: scale(self.legend, factor),
            figure_title: scale(self.figure_title, factor),
        }
    }

    /// `(host key, size)` pairs.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("font.size", self.font),
            ("axes.labelsize", self.axes_label),
            ("axes.titlesize", self.axes_title),
            ("xtick.labelsize", self.xtick_label),
            ("ytick.labelsize", self.ytick_label),
            ("legend.fontsize", self.legend),
            ("figure.titlesize", self.figure_title),
        ]
    }
}

fn scale(size: f64, factor: f64) -> f64 {
    (size * factor * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleBase;

    #[test]
    fn identity_scale() {
        let base = StyleBase::SeabornPaper.base_font_sizes();
        assert_eq!(base.scaled(1.0), base);
    }

    #[test]
    fn rounding_to_two_decimals() {
        let base = StyleBase::SeabornPaper.base_font_sizes();
        let scaled = base.scaled(1.4);
        assert_eq!(scaled.axes_label, 12.32);
        assert_eq!(scaled.axes_title, 13.44);
        assert_eq!(scaled.legend, 11.2);
        assert_eq!(scaled.font, 14.0);
    }

    #[test]
    fn entries_cover_every_role() {
        let sizes = StyleBase::SeabornNotebook.base_font_sizes();
        let entries = sizes.entries();
        assert_eq!(entries.len(), 7);
        assert!(entries.contains(&("axes.labelsize", 11.0)));
        assert!(entries.contains(&("figure.titlesize", 12.0)));
    }
}
