//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use pyramid_tour::TourError;
    use pyramid_tour::io::error::{WithPath, invalid_parameter, invalid_supply};
    use pyramid_tour::tour::verify::TourDefect;
    use std::error::Error;
    use std::path::Path;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let error = TourError::FileSystem {
            path: "/tmp/tours.txt".into(),
            operation: "create",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create"));
        assert!(message.contains("/tmp/tours.txt"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("size", &0, &"the tray needs at least one cell");
        let message = error.to_string();
        assert!(message.contains("size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("at least one cell"));
        assert!(error.source().is_none());
    }

    // Tests InvalidSupply error echoes the input
    // Verified by dropping the input from the message
    #[test]
    fn test_invalid_supply_error() {
        let error = invalid_supply(&"1:x", &"bad count");
        assert_eq!(error.to_string(), "Invalid supply '1:x': bad count");
    }

    // Tests defective tours chain to the defect
    // Verified by returning no source for defective tours
    #[test]
    fn test_defective_tour_error() {
        let error = TourError::DefectiveTour {
            index: 3,
            defect: TourDefect::NotClosed { end: [1, 2] },
        };
        assert!(error.to_string().contains("Solution 3"));
        assert!(error.source().is_some());
    }

    // Tests path context is attached to raw I/O errors
    // Verified by discarding the provided path
    #[test]
    fn test_with_path() {
        let failure: std::io::Result<()> = Err(std::io::Error::other("disk full"));
        let result = failure.with_path(Path::new("out.txt"), "write");
        let Err(TourError::FileSystem {
            path, operation, ..
        }) = result
        else {
            panic!("expected a file system error");
        };
        assert_eq!(path, Path::new("out.txt"));
        assert_eq!(operation, "write");

        let success: std::io::Result<u8> = Ok(7);
        assert!(matches!(success.with_path(Path::new("x"), "read"), Ok(7)));
    }

    // Tests plain I/O errors convert through the From impl
    // Verified by mapping I/O errors to InvalidParameter
    #[test]
    fn test_io_error_conversion() {
        let error: TourError = std::io::Error::other("broken pipe").into();
        assert!(matches!(error, TourError::FileSystem { .. }));
    }
}
