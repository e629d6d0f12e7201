//! Tests for channel-layout decision and fill-color parsing

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tessera::color::mode::{ColorMode, FillColor};

    // Tests channel counts per mode
    // Verified by swapping the match arms in channels
    #[test]
    fn test_mode_channels() {
        assert_eq!(ColorMode::Rgb.channels(), 3);
        assert_eq!(ColorMode::Rgba.channels(), 4);
        assert!(!ColorMode::Rgb.has_alpha());
        assert!(ColorMode::Rgba.has_alpha());
    }

    // Tests alpha-aware mode requires both a 4-component fill and a capable format
    // Verified by dropping either condition from decide
    #[test]
    fn test_decide_requires_fill_and_format() {
        let four = FillColor::Rgba([0, 0, 0, 0]);
        let three = FillColor::Rgb([0, 0, 0]);

        assert_eq!(ColorMode::decide(Path::new("in.png"), four), ColorMode::Rgba);
        assert_eq!(ColorMode::decide(Path::new("in.gif"), four), ColorMode::Rgba);
        assert_eq!(ColorMode::decide(Path::new("in.png"), three), ColorMode::Rgb);
        assert_eq!(ColorMode::decide(Path::new("in.jpg"), four), ColorMode::Rgb);
        assert_eq!(ColorMode::decide(Path::new("in"), four), ColorMode::Rgb);
    }

    // Tests extension comparison ignores case
    // Verified by replacing eq_ignore_ascii_case with equality
    #[test]
    fn test_decide_is_case_insensitive() {
        let four = FillColor::Rgba([1, 2, 3, 4]);
        assert_eq!(ColorMode::decide(Path::new("in.PNG"), four), ColorMode::Rgba);
        assert_eq!(ColorMode::decide(Path::new("in.Gif"), four), ColorMode::Rgba);
    }

    // Tests parsing of 3- and 4-component fills with optional spaces
    // Verified by removing the trim call from the parser
    #[test]
    fn test_fill_parsing() {
        assert_eq!(
            "0,0,0".parse::<FillColor>(),
            Ok(FillColor::Rgb([0, 0, 0]))
        );
        assert_eq!(
            "10, 20, 30, 40".parse::<FillColor>(),
            Ok(FillColor::Rgba([10, 20, 30, 40]))
        );
        assert_eq!(
            "255,255,255,255".parse::<FillColor>(),
            Ok(FillColor::Rgba([255, 255, 255, 255]))
        );
    }

    // Tests rejection of wrong component counts and out-of-range values
    // Verified by widening the accepted component range
    #[test]
    fn test_fill_parsing_rejects_invalid_input() {
        assert!("1,2".parse::<FillColor>().is_err());
        assert!("1,2,3,4,5".parse::<FillColor>().is_err());
        assert!("256,0,0".parse::<FillColor>().is_err());
        assert!("-1,0,0".parse::<FillColor>().is_err());
        assert!("a,b,c".parse::<FillColor>().is_err());
        assert!(String::new().parse::<FillColor>().is_err());
    }

    // Tests canonicalization pins alpha under opaque mode and truncates 4-component fills
    // Verified by keeping the parsed alpha in opaque mode
    #[test]
    fn test_fill_canonical_form() {
        let three = FillColor::Rgb([10, 20, 30]);
        let four = FillColor::Rgba([10, 20, 30, 40]);

        assert_eq!(three.canonical(ColorMode::Rgb), [10, 20, 30, 255]);
        assert_eq!(three.canonical(ColorMode::Rgba), [10, 20, 30, 255]);
        assert_eq!(four.canonical(ColorMode::Rgb), [10, 20, 30, 255]);
        assert_eq!(four.canonical(ColorMode::Rgba), [10, 20, 30, 40]);
    }

    // Tests component counts drive the mode decision
    // Verified by returning a fixed count from component_count
    #[test]
    fn test_fill_component_count() {
        assert_eq!(FillColor::Rgb([0, 0, 0]).component_count(), 3);
        assert_eq!(FillColor::Rgba([0, 0, 0, 0]).component_count(), 4);
    }
}
