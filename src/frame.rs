/// Named viewport simulation sizes for the preview surface.
///
/// Switching frames only changes the visual framing of the sandbox, never
/// its document, and must not force a reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceFrame {
    Mobile,
    Tablet,
    Desktop,
    #[default]
    Fullwidth,
}

impl DeviceFrame {
    pub const ALL: [DeviceFrame; 4] = [
        DeviceFrame::Mobile,
        DeviceFrame::Tablet,
        DeviceFrame::Desktop,
        DeviceFrame::Fullwidth,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DeviceFrame::Mobile => "mobile",
            DeviceFrame::Tablet => "tablet",
            DeviceFrame::Desktop => "desktop",
            DeviceFrame::Fullwidth => "fullwidth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceFrame::Mobile => "Mobile",
            DeviceFrame::Tablet => "Tablet",
            DeviceFrame::Desktop => "Desktop",
            DeviceFrame::Fullwidth => "Full Width",
        }
    }

    /// Frame width in CSS pixels; `None` means fluid (fill the panel).
    pub fn width(self) -> Option<u32> {
        match self {
            DeviceFrame::Mobile => Some(375),
            DeviceFrame::Tablet => Some(768),
            DeviceFrame::Desktop => Some(1440),
            DeviceFrame::Fullwidth => None,
        }
    }

    pub fn height(self) -> u32 {
        match self {
            DeviceFrame::Mobile => 667,
            DeviceFrame::Tablet => 1024,
            DeviceFrame::Desktop => 900,
            DeviceFrame::Fullwidth => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_frames_have_fixed_widths() {
        assert_eq!(DeviceFrame::Mobile.width(), Some(375));
        assert_eq!(DeviceFrame::Tablet.width(), Some(768));
        assert_eq!(DeviceFrame::Desktop.width(), Some(1440));
    }

    #[test]
    fn fullwidth_is_fluid_with_fixed_height() {
        assert_eq!(DeviceFrame::Fullwidth.width(), None);
        assert_eq!(DeviceFrame::Fullwidth.height(), 500);
    }
}
