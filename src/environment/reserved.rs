//! Names a custom environment value may not shadow.

/// Top-level names visible to every document.
const TOP_LEVEL: &[&str] = &[
    "environment",
    "viewport",
    "config",
    "Math",
    "String",
    "Array",
    "Time",
    "elapsedTime",
    "localTime",
    "utcTime",
    "event",
];

/// Properties of the default `environment` object.
const ENVIRONMENT: &[&str] = &[
    "agentName",
    "agentVersion",
    "allowOpenURL",
    "animation",
    "aplVersion",
    "disallowDialog",
    "disallowEditText",
    "disallowVideo",
    "documentAPLVersion",
    "extension",
    "fontScale",
    "lang",
    "layoutDirection",
    "reducedMotion",
    "screenMode",
    "screenReader",
    "timing",
];

/// Properties of the default `viewport` object.
const VIEWPORT: &[&str] = &[
    "width",
    "height",
    "pixelWidth",
    "pixelHeight",
    "dpi",
    "shape",
    "theme",
    "mode",
    "autoWidth",
    "autoHeight",
    "minWidth",
    "maxWidth",
    "minHeight",
    "maxHeight",
    "pixelDensity",
    "video",
];

/// Properties synthesized when a configuration change is reported.
const CONFIGURATION_CHANGE: &[&str] = &["rotated", "sizeChanged", "environmentValues"];

/// Return true if `name` collides with a built-in name. Matching is exact.
pub fn is_reserved(name: &str) -> bool {
    [TOP_LEVEL, ENVIRONMENT, VIEWPORT, CONFIGURATION_CHANGE]
        .iter()
        .any(|names| names.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_cover_every_group() {
        assert!(is_reserved("environment"));
        assert!(is_reserved("agentName"));
        assert!(is_reserved("theme"));
        assert!(is_reserved("rotated"));
    }

    #[test]
    fn reserved_names_are_case_sensitive() {
        assert!(!is_reserved("Width"));
        assert!(!is_reserved("ROTATED"));
        assert!(!is_reserved("customValue"));
    }
}
