//! SVG rewriting
//!
//! Rendered Figma SVGs are rewritten in a single pass over the XML events:
//! declarations and comments are dropped, colors are optionally replaced with
//! `currentColor` and the root element's sizing is normalized. The same event
//! loop converts an SVG into JSX markup for the generated wrappers.

use crate::error::{ExportError, Result};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};

/// Flags controlling [`optimize`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvgOptions {
    /// Keep `fill` and `stroke` values as exported
    pub preserve_colors: bool,
    /// Keep the root `width`/`height` and center the artwork
    pub non_square: bool,
}

/// Optimize an SVG exported from Figma
///
/// `context` names the component in error messages.
pub fn optimize(raw: &str, options: SvgOptions, context: &str) -> Result<String> {
    rewrite(raw, context, Writer::new(Vec::new()), |elem, is_root| {
        rewrite_attributes(elem, is_root, options)
    })
}

/// Convert SVG markup into JSX with `{...props}` spread on the root element
pub fn to_jsx(svg: &str, context: &str) -> Result<String> {
    let jsx = rewrite(
        svg,
        context,
        Writer::new_with_indent(Vec::new(), b' ', 2),
        |elem, _| jsx_attributes(elem),
    )?;
    Ok(jsx.replacen("<svg", "<svg {...props}", 1))
}

fn rewrite<F>(raw: &str, context: &str, mut writer: Writer<Vec<u8>>, mut map: F) -> Result<String>
where
    F: FnMut(&BytesStart<'_>, bool) -> std::result::Result<BytesStart<'static>, String>,
{
    let svg_error = |message: String| ExportError::Svg {
        context: context.to_string(),
        message,
    };

    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut seen_root = false;
    loop {
        let event = reader.read_event().map_err(|e| {
            svg_error(format!(
                "parse error at position {}: {}",
                reader.error_position(),
                e
            ))
        })?;

        let event = match event {
            Event::Eof => break,
            Event::Decl(_) | Event::Comment(_) | Event::DocType(_) | Event::PI(_) => continue,
            Event::Start(elem) => {
                let is_root = !seen_root && elem.name().as_ref() == b"svg";
                seen_root = true;
                Event::Start(map(&elem, is_root).map_err(svg_error)?)
            }
            Event::Empty(elem) => {
                let is_root = !seen_root && elem.name().as_ref() == b"svg";
                seen_root = true;
                Event::Empty(map(&elem, is_root).map_err(svg_error)?)
            }
            other => other,
        };

        writer
            .write_event(event)
            .map_err(|e| svg_error(e.to_string()))?;
    }

    if !seen_root {
        return Err(svg_error("document has no elements".to_string()));
    }

    String::from_utf8(writer.into_inner()).map_err(|e| svg_error(e.to_string()))
}

fn rewrite_attributes(
    elem: &BytesStart<'_>,
    is_root: bool,
    options: SvgOptions,
) -> std::result::Result<BytesStart<'static>, String> {
    let mut out = elem.to_owned();
    out.clear_attributes();

    for attr in elem.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = attr.key.as_ref();
        let value = attr.value.as_ref();

        match key {
            b"width" | b"height" if is_root && !options.non_square => {}
            b"preserveAspectRatio" if is_root && options.non_square => {}
            b"fill" | b"stroke" if !options.preserve_colors && value != b"none" => {
                out.push_attribute((key, b"currentColor".as_slice()));
            }
            _ => out.push_attribute((key, value)),
        }
    }

    if is_root && options.non_square {
        out.push_attribute(("preserveAspectRatio", "xMidYMid meet"));
    }

    Ok(out)
}

fn jsx_attributes(elem: &BytesStart<'_>) -> std::result::Result<BytesStart<'static>, String> {
    let mut out = elem.to_owned();
    out.clear_attributes();

    for attr in elem.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| e.to_string())?;
        if key == "style" {
            continue;
        }
        let name = jsx_attribute_name(key);
        out.push_attribute((name.as_bytes(), attr.value.as_ref()));
    }

    Ok(out)
}

/// Map an SVG attribute name to its React prop name
fn jsx_attribute_name(key: &str) -> String {
    if key == "class" {
        return "className".to_string();
    }
    if key.starts_with("data-") || key.starts_with("aria-") {
        return key.to_string();
    }

    let mut name = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '-' || c == ':' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: Figma -->
<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
  <path d="M4 12h16" stroke="#1E1E1E" stroke-width="2"/>
  <circle cx="12" cy="12" r="3" fill="#FF0000"/>
</svg>
"##;

    #[test]
    fn test_strips_colors_and_size() {
        let out = optimize(ICON, SvgOptions::default(), "Icon").unwrap();

        assert!(out.starts_with("<svg viewBox=\"0 0 24 24\" fill=\"none\""));
        assert!(!out.contains("width=\"24\""));
        assert!(!out.contains("#1E1E1E"));
        assert!(!out.contains("#FF0000"));
        assert!(out.contains("stroke=\"currentColor\""));
        assert!(out.contains("fill=\"currentColor\""));
        assert!(!out.contains("<?xml"));
        assert!(!out.contains("Generator"));
    }

    #[test]
    fn test_preserve_colors() {
        let options = SvgOptions {
            preserve_colors: true,
            ..Default::default()
        };
        let out = optimize(ICON, options, "Icon").unwrap();
        assert!(out.contains("stroke=\"#1E1E1E\""));
        assert!(out.contains("fill=\"#FF0000\""));
    }

    #[test]
    fn test_non_square_keeps_dimensions() {
        let raw = r#"<svg width="48" height="24" viewBox="0 0 48 24" preserveAspectRatio="none"><rect width="48" height="24"/></svg>"#;
        let options = SvgOptions {
            non_square: true,
            ..Default::default()
        };
        let out = optimize(raw, options, "Wide").unwrap();
        assert_eq!(
            out,
            r#"<svg width="48" height="24" viewBox="0 0 48 24" preserveAspectRatio="xMidYMid meet"><rect width="48" height="24"/></svg>"#
        );
    }

    #[test]
    fn test_nested_dimensions_are_untouched() {
        let raw = r#"<svg width="24" height="24"><rect width="10" height="10"/></svg>"#;
        let out = optimize(raw, SvgOptions::default(), "Box").unwrap();
        assert_eq!(out, r#"<svg><rect width="10" height="10"/></svg>"#);
    }

    #[test]
    fn test_deterministic() {
        let a = optimize(ICON, SvgOptions::default(), "Icon").unwrap();
        let b = optimize(ICON, SvgOptions::default(), "Icon").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_svg() {
        let err = optimize("<svg><path></svg>", SvgOptions::default(), "Broken").unwrap_err();
        assert!(matches!(err, ExportError::Svg { ref context, .. } if context == "Broken"));
    }

    #[test]
    fn test_empty_document() {
        assert!(optimize("", SvgOptions::default(), "Empty").is_err());
    }

    #[test]
    fn test_to_jsx() {
        let svg = r##"<svg viewBox="0 0 24 24" class="icon" style="mask-type:alpha"><path fill-rule="evenodd" stroke-width="2" data-name="x" xlink:href="#a"/></svg>"##;
        let jsx = to_jsx(svg, "Icon").unwrap();

        assert!(jsx.starts_with("<svg {...props} viewBox=\"0 0 24 24\" className=\"icon\">"));
        assert!(jsx.contains("fillRule=\"evenodd\""));
        assert!(jsx.contains("strokeWidth=\"2\""));
        assert!(jsx.contains("data-name=\"x\""));
        assert!(jsx.contains("xlinkHref=\"#a\""));
        assert!(!jsx.contains("style"));
    }

    #[test]
    fn test_jsx_attribute_name() {
        assert_eq!(jsx_attribute_name("clip-path"), "clipPath");
        assert_eq!(jsx_attribute_name("xmlns:xlink"), "xmlnsXlink");
        assert_eq!(jsx_attribute_name("viewBox"), "viewBox");
        assert_eq!(jsx_attribute_name("aria-hidden"), "aria-hidden");
    }
}
