//! Per-property conversion rules from raw CSS values to Tailwind utility
//! classes.
//!
//! The dispatch in [`convert_property`] is total: a recognized property with a
//! value outside every lookup table degrades to a bracketed arbitrary-value
//! class, and an unrecognized property is rendered as a visible placeholder
//! comment. No converter ever fails.

use crate::parser::StyleDeclarations;
use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

/// Pixel value → spacing scale step (the 4px grid)
static SPACING_PX: phf::Map<&'static str, &'static str> = phf_map! {
    "4" => "1",
    "8" => "2",
    "12" => "3",
    "16" => "4",
    "20" => "5",
    "24" => "6",
    "32" => "8",
    "40" => "10",
    "48" => "12",
    "64" => "16",
    "80" => "20",
    "96" => "24",
    "128" => "32",
    "160" => "40",
    "192" => "48",
    "224" => "56",
    "256" => "64",
    "288" => "72",
    "320" => "80",
    "384" => "96",
};

/// Rem value → spacing scale step (mirrors the pixel table at 16px/rem)
static SPACING_REM: phf::Map<&'static str, &'static str> = phf_map! {
    "0.25" => "1",
    "0.5" => "2",
    "0.75" => "3",
    "1" => "4",
    "1.25" => "5",
    "1.5" => "6",
    "2" => "8",
    "2.5" => "10",
    "3" => "12",
    "4" => "16",
    "5" => "20",
    "6" => "24",
    "8" => "32",
    "10" => "40",
    "12" => "48",
    "14" => "56",
    "16" => "64",
    "18" => "72",
    "20" => "80",
    "24" => "96",
};

/// Named fractional percentages → fraction class suffixes
static SIZE_FRACTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "50%" => "1/2",
    "33.333%" => "1/3",
    "33.3333%" => "1/3",
    "66.666%" => "2/3",
    "66.6666%" => "2/3",
    "25%" => "1/4",
    "75%" => "3/4",
    "20%" => "1/5",
    "40%" => "2/5",
    "60%" => "3/5",
    "80%" => "4/5",
    "100%" => "full",
};

/// Small pixel sizes → size scale suffixes
static SIZE_PX: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "0",
    "1" => "px",
    "4" => "1",
    "8" => "2",
    "12" => "3",
    "16" => "4",
};

/// Pixel/rem font sizes → named text-size tokens
static FONT_SIZES: phf::Map<&'static str, &'static str> = phf_map! {
    "12px" => "xs",
    "0.75rem" => "xs",
    "14px" => "sm",
    "0.875rem" => "sm",
    "16px" => "base",
    "1rem" => "base",
    "18px" => "lg",
    "1.125rem" => "lg",
    "20px" => "xl",
    "1.25rem" => "xl",
    "24px" => "2xl",
    "1.5rem" => "2xl",
    "30px" => "3xl",
    "1.875rem" => "3xl",
    "36px" => "4xl",
    "2.25rem" => "4xl",
    "48px" => "5xl",
    "3rem" => "5xl",
    "60px" => "6xl",
    "3.75rem" => "6xl",
};

/// Numeric and keyword font weights → named weight tokens
static FONT_WEIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
    "100" => "thin",
    "200" => "extralight",
    "300" => "light",
    "400" => "normal",
    "500" => "medium",
    "600" => "semibold",
    "700" => "bold",
    "800" => "extrabold",
    "900" => "black",
    "normal" => "normal",
    "bold" => "bold",
};

/// Pixel/rem corner radii → named radius classes
static BORDER_RADII: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "rounded-none",
    "0px" => "rounded-none",
    "2px" => "rounded-sm",
    "0.125rem" => "rounded-sm",
    "4px" => "rounded",
    "0.25rem" => "rounded",
    "6px" => "rounded-md",
    "0.375rem" => "rounded-md",
    "8px" => "rounded-lg",
    "0.5rem" => "rounded-lg",
    "12px" => "rounded-xl",
    "0.75rem" => "rounded-xl",
    "16px" => "rounded-2xl",
    "1rem" => "rounded-2xl",
    "24px" => "rounded-3xl",
    "1.5rem" => "rounded-3xl",
    "9999px" => "rounded-full",
    "50%" => "rounded-full",
};

lazy_static! {
    /// `<width> <style> <color>` shorthand, e.g. `1px solid black`
    static ref BORDER_SHORTHAND: Regex = Regex::new(r"^(\S+)\s+(\S+)\s+(\S+)$").unwrap();
}

/// Resolve a spacing value to its scale suffix.
///
/// Returns the suffix only; the caller prepends the per-property prefix
/// (`p-`, `ml-`, `top-`, ...). Values outside the scale tables come back as a
/// bracketed arbitrary value.
pub fn convert_spacing(value: &str) -> String {
    if value == "0" || value == "0px" || value == "0rem" {
        return "0".to_string();
    }

    if let Some(px) = value.strip_suffix("px") {
        if let Some(step) = SPACING_PX.get(px) {
            return (*step).to_string();
        }
    } else if let Some(rem) = value.strip_suffix("rem") {
        if let Some(step) = SPACING_REM.get(rem) {
            return (*step).to_string();
        }
    }

    format!("[{}]", value)
}

/// Resolve a width/height value to a full class with the given prefix
/// (`w`, `h`, `min-w`, `max-w`, `min-h`, `max-h`)
pub fn convert_size(value: &str, prefix: &str) -> String {
    if value == "auto" {
        return format!("{}-auto", prefix);
    }

    if let Some(fraction) = SIZE_FRACTIONS.get(value) {
        return format!("{}-{}", prefix, fraction);
    }

    if value == "0" {
        return format!("{}-0", prefix);
    }

    if let Some(px) = value.strip_suffix("px") {
        if let Some(step) = SIZE_PX.get(px) {
            return format!("{}-{}", prefix, step);
        }
    }

    format!("{}-[{}]", prefix, value)
}

/// Resolve a color value to a full class with the given prefix
/// (`text`, `bg`, `border`)
pub fn convert_color(value: &str, prefix: &str) -> String {
    match value {
        "transparent" => format!("{}-transparent", prefix),
        "white" | "#fff" | "#ffffff" => format!("{}-white", prefix),
        "black" | "#000" | "#000000" => format!("{}-black", prefix),
        _ if value.starts_with('#') || value.starts_with("rgb(") || value.starts_with("rgba(") => {
            format!("{}-[{}]", prefix, value)
        }
        // Assume anything else is a named color token
        _ => format!("{}-{}", prefix, value),
    }
}

pub fn convert_font_size(value: &str) -> String {
    match FONT_SIZES.get(value) {
        Some(token) => format!("text-{}", token),
        None => format!("text-[{}]", value),
    }
}

pub fn convert_font_weight(value: &str) -> String {
    match FONT_WEIGHTS.get(value) {
        Some(token) => format!("font-{}", token),
        None => format!("font-[{}]", value),
    }
}

pub fn convert_border_radius(value: &str) -> String {
    match BORDER_RADII.get(value) {
        Some(class) => (*class).to_string(),
        None => format!("rounded-[{}]", value),
    }
}

/// Convert a `border` shorthand of the shape `<width> <style> <color>`.
///
/// A solid black 1px border collapses to the bare `border` token; non-default
/// width, style, and color each append their own class. Anything that does
/// not match the three-part shape falls back to `border`.
pub fn convert_border(value: &str) -> String {
    let caps = match BORDER_SHORTHAND.captures(value.trim()) {
        Some(caps) => caps,
        None => return "border".to_string(),
    };

    let (width, style, color) = (&caps[1], &caps[2], &caps[3]);

    let mut classes = vec![match width {
        "1px" => "border".to_string(),
        "2px" => "border-2".to_string(),
        "4px" => "border-4".to_string(),
        "8px" => "border-8".to_string(),
        other => format!("border-[{}]", other),
    }];

    if style != "solid" {
        classes.push(format!("border-{}", style));
    }

    if !matches!(color, "black" | "#000" | "#000000") {
        classes.push(convert_color(color, "border"));
    }

    classes.join(" ")
}

pub fn convert_justify_content(value: &str) -> String {
    let token = match value {
        "flex-start" => "start",
        "flex-end" => "end",
        "center" => "center",
        "space-between" => "between",
        "space-around" => "around",
        "space-evenly" => "evenly",
        other => other,
    };
    format!("justify-{}", token)
}

pub fn convert_align_items(value: &str) -> String {
    let token = match value {
        "flex-start" => "start",
        "flex-end" => "end",
        "center" => "center",
        "baseline" => "baseline",
        "stretch" => "stretch",
        other => other,
    };
    format!("items-{}", token)
}

/// Convert one declaration to its utility-class expression.
///
/// Total over any `(property, value)` pair: properties without a conversion
/// rule come back as a `/* No mapping ... */` placeholder so the gap stays
/// visible in the suggested class list.
pub fn convert_property(property: &str, value: &str) -> String {
    match property {
        "padding" => format!("p-{}", convert_spacing(value)),
        "padding-left" => format!("pl-{}", convert_spacing(value)),
        "padding-right" => format!("pr-{}", convert_spacing(value)),
        "padding-top" => format!("pt-{}", convert_spacing(value)),
        "padding-bottom" => format!("pb-{}", convert_spacing(value)),
        "margin" => format!("m-{}", convert_spacing(value)),
        "margin-left" => format!("ml-{}", convert_spacing(value)),
        "margin-right" => format!("mr-{}", convert_spacing(value)),
        "margin-top" => format!("mt-{}", convert_spacing(value)),
        "margin-bottom" => format!("mb-{}", convert_spacing(value)),
        "top" => format!("top-{}", convert_spacing(value)),
        "right" => format!("right-{}", convert_spacing(value)),
        "bottom" => format!("bottom-{}", convert_spacing(value)),
        "left" => format!("left-{}", convert_spacing(value)),
        "z-index" => format!("z-{}", convert_spacing(value)),

        "width" => convert_size(value, "w"),
        "height" => convert_size(value, "h"),
        "min-width" => convert_size(value, "min-w"),
        "max-width" => convert_size(value, "max-w"),
        "min-height" => convert_size(value, "min-h"),
        "max-height" => convert_size(value, "max-h"),

        "font-size" => convert_font_size(value),
        "font-weight" => convert_font_weight(value),
        "text-align" => format!("text-{}", value),
        "color" => convert_color(value, "text"),
        "background-color" => convert_color(value, "bg"),

        "border-radius" => convert_border_radius(value),
        "border" => convert_border(value),

        "flex-direction" => format!("flex-{}", value),
        "justify-content" => convert_justify_content(value),
        "align-items" => convert_align_items(value),
        "flex-grow" => {
            if value == "1" {
                "flex-grow".to_string()
            } else {
                format!("flex-grow-{}", value)
            }
        }
        "flex-shrink" => {
            if value == "1" {
                "flex-shrink".to_string()
            } else {
                format!("flex-shrink-{}", value)
            }
        }
        "display" | "position" => value.to_string(),

        _ => format!("/* No mapping for {}: {} */", property, value),
    }
}

/// Convert a full declaration set to a space-joined class list.
///
/// Every declaration contributes exactly one class expression, in source
/// order; nothing is silently dropped.
pub fn convert_declarations(declarations: &StyleDeclarations) -> String {
    declarations
        .iter()
        .map(|(property, value)| convert_property(property, value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_style_object;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spacing_scale_pixels() {
        let table = [
            ("4px", "1"),
            ("8px", "2"),
            ("12px", "3"),
            ("16px", "4"),
            ("20px", "5"),
            ("24px", "6"),
            ("32px", "8"),
            ("40px", "10"),
            ("48px", "12"),
            ("64px", "16"),
            ("80px", "20"),
            ("96px", "24"),
            ("128px", "32"),
            ("160px", "40"),
            ("192px", "48"),
            ("224px", "56"),
            ("256px", "64"),
            ("288px", "72"),
            ("320px", "80"),
            ("384px", "96"),
        ];
        for (value, step) in table {
            assert_eq!(convert_spacing(value), step, "for {}", value);
        }
    }

    #[test]
    fn test_spacing_scale_rems() {
        assert_eq!(convert_spacing("0.25rem"), "1");
        assert_eq!(convert_spacing("1rem"), "4");
        assert_eq!(convert_spacing("2.5rem"), "10");
        assert_eq!(convert_spacing("24rem"), "96");
    }

    #[test]
    fn test_spacing_zero_and_arbitrary_fallback() {
        assert_eq!(convert_spacing("0"), "0");
        assert_eq!(convert_spacing("0px"), "0");
        assert_eq!(convert_spacing("17px"), "[17px]");
        assert_eq!(convert_spacing("1.1rem"), "[1.1rem]");
        assert_eq!(convert_spacing("50%"), "[50%]");
    }

    #[test]
    fn test_spacing_properties_get_their_prefix() {
        assert_eq!(convert_property("padding", "16px"), "p-4");
        assert_eq!(convert_property("padding-left", "8px"), "pl-2");
        assert_eq!(convert_property("margin-top", "0"), "mt-0");
        assert_eq!(convert_property("top", "4px"), "top-1");
        assert_eq!(convert_property("z-index", "10"), "z-[10]");
    }

    #[test]
    fn test_size_fractions() {
        assert_eq!(convert_size("50%", "w"), "w-1/2");
        assert_eq!(convert_size("33.333%", "w"), "w-1/3");
        assert_eq!(convert_size("33.3333%", "w"), "w-1/3");
        assert_eq!(convert_size("66.666%", "h"), "h-2/3");
        assert_eq!(convert_size("25%", "w"), "w-1/4");
        assert_eq!(convert_size("75%", "w"), "w-3/4");
        assert_eq!(convert_size("20%", "w"), "w-1/5");
        assert_eq!(convert_size("40%", "w"), "w-2/5");
        assert_eq!(convert_size("60%", "w"), "w-3/5");
        assert_eq!(convert_size("80%", "w"), "w-4/5");
        assert_eq!(convert_size("100%", "w"), "w-full");
    }

    #[test]
    fn test_size_pixels_auto_and_fallback() {
        assert_eq!(convert_size("auto", "w"), "w-auto");
        assert_eq!(convert_size("0px", "w"), "w-0");
        assert_eq!(convert_size("1px", "w"), "w-px");
        assert_eq!(convert_size("16px", "h"), "h-4");
        assert_eq!(convert_size("17px", "w"), "w-[17px]");
        assert_eq!(convert_property("min-width", "320px"), "min-w-[320px]");
        assert_eq!(convert_property("max-height", "100%"), "max-h-full");
    }

    #[test]
    fn test_font_size_tokens() {
        assert_eq!(convert_font_size("12px"), "text-xs");
        assert_eq!(convert_font_size("0.875rem"), "text-sm");
        assert_eq!(convert_font_size("16px"), "text-base");
        assert_eq!(convert_font_size("1.5rem"), "text-2xl");
        assert_eq!(convert_font_size("60px"), "text-6xl");
        assert_eq!(convert_font_size("13px"), "text-[13px]");
    }

    #[test]
    fn test_font_weight_tokens() {
        assert_eq!(convert_font_weight("100"), "font-thin");
        assert_eq!(convert_font_weight("400"), "font-normal");
        assert_eq!(convert_font_weight("700"), "font-bold");
        assert_eq!(convert_font_weight("900"), "font-black");
        assert_eq!(convert_font_weight("normal"), "font-normal");
        assert_eq!(convert_font_weight("bold"), "font-bold");
        assert_eq!(convert_font_weight("450"), "font-[450]");
    }

    #[test]
    fn test_color_named_and_hex() {
        assert_eq!(convert_color("#ffffff", "text"), "text-white");
        assert_eq!(convert_color("#fff", "bg"), "bg-white");
        assert_eq!(convert_color("white", "bg"), "bg-white");
        assert_eq!(convert_color("#000000", "text"), "text-black");
        assert_eq!(convert_color("transparent", "bg"), "bg-transparent");
        assert_eq!(convert_color("red", "text"), "text-red");
    }

    #[test]
    fn test_color_arbitrary_values() {
        assert_eq!(convert_color("#1a73e8", "text"), "text-[#1a73e8]");
        assert_eq!(convert_color("rgb(10,20,30)", "bg"), "bg-[rgb(10,20,30)]");
        assert_eq!(
            convert_color("rgba(0,0,0,0.5)", "text"),
            "text-[rgba(0,0,0,0.5)]"
        );
    }

    #[test]
    fn test_border_radius_tokens() {
        assert_eq!(convert_border_radius("0"), "rounded-none");
        assert_eq!(convert_border_radius("2px"), "rounded-sm");
        assert_eq!(convert_border_radius("4px"), "rounded");
        assert_eq!(convert_border_radius("6px"), "rounded-md");
        assert_eq!(convert_border_radius("8px"), "rounded-lg");
        assert_eq!(convert_border_radius("12px"), "rounded-xl");
        assert_eq!(convert_border_radius("16px"), "rounded-2xl");
        assert_eq!(convert_border_radius("24px"), "rounded-3xl");
        assert_eq!(convert_border_radius("9999px"), "rounded-full");
        assert_eq!(convert_border_radius("50%"), "rounded-full");
        assert_eq!(convert_border_radius("5px"), "rounded-[5px]");
    }

    #[test]
    fn test_border_default_collapses_to_bare_token() {
        assert_eq!(convert_border("1px solid black"), "border");
        assert_eq!(convert_border("1px solid #000"), "border");
    }

    #[test]
    fn test_border_width_style_and_color_append() {
        assert_eq!(
            convert_border("2px dashed #ff0000"),
            "border-2 border-dashed border-[#ff0000]"
        );
        assert_eq!(convert_border("4px solid white"), "border-4 border-white");
        assert_eq!(
            convert_border("3px dotted gray"),
            "border-[3px] border-dotted border-gray"
        );
    }

    #[test]
    fn test_border_non_shorthand_falls_back() {
        assert_eq!(convert_border("none"), "border");
        assert_eq!(convert_border("1px solid"), "border");
    }

    #[test]
    fn test_flex_and_layout() {
        assert_eq!(convert_property("flex-direction", "row"), "flex-row");
        assert_eq!(convert_property("flex-direction", "column"), "flex-column");
        assert_eq!(convert_property("justify-content", "space-between"), "justify-between");
        assert_eq!(convert_property("justify-content", "flex-start"), "justify-start");
        assert_eq!(convert_property("justify-content", "left"), "justify-left");
        assert_eq!(convert_property("align-items", "center"), "items-center");
        assert_eq!(convert_property("align-items", "flex-end"), "items-end");
        assert_eq!(convert_property("flex-grow", "1"), "flex-grow");
        assert_eq!(convert_property("flex-grow", "2"), "flex-grow-2");
        assert_eq!(convert_property("flex-shrink", "1"), "flex-shrink");
        assert_eq!(convert_property("flex-shrink", "0"), "flex-shrink-0");
        assert_eq!(convert_property("display", "flex"), "flex");
        assert_eq!(convert_property("position", "absolute"), "absolute");
    }

    #[test]
    fn test_unknown_property_placeholder() {
        assert_eq!(
            convert_property("unknown-prop", "5px"),
            "/* No mapping for unknown-prop: 5px */"
        );
    }

    #[test]
    fn test_declarations_join_in_source_order() {
        let decls = parse_style_object("padding: '16px', color: 'red'").unwrap();
        assert_eq!(convert_declarations(&decls), "p-4 text-red");
    }

    #[test]
    fn test_every_declaration_appears_exactly_once() {
        let decls =
            parse_style_object("display: 'flex', gap: '4px', margin: '8px'").unwrap();
        let classes = convert_declarations(&decls);
        assert_eq!(classes, "flex /* No mapping for gap: 4px */ m-2");
    }
}
