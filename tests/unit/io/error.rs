//! Tests for error types and constructors

#[cfg(test)]
mod tests {
    use alpona::AlponaError;
    use alpona::io::error::{file_system_error, invalid_parameter};
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    // Tests display output of each variant
    // Verified by dropping the value from the dimension message
    #[test]
    fn test_error_display() {
        let dimension = AlponaError::InvalidDimension {
            parameter: "width",
            value: 0,
            reason: "must be positive".to_string(),
        };
        assert_eq!(dimension.to_string(), "Invalid width 0: must be positive");

        let pool = AlponaError::EmptyMotifPool { pool: "anchor" };
        assert_eq!(pool.to_string(), "The anchor motif pool is empty");

        let parameter = invalid_parameter("layers", &"10..=5", &"empty range");
        assert_eq!(
            parameter.to_string(),
            "Invalid parameter 'layers' = '10..=5': empty range"
        );
    }

    // Tests file system errors keep their path, operation and cause
    // Verified by returning None from source for file system errors
    #[test]
    fn test_file_system_error() {
        let error = file_system_error(
            "output/image_0.png",
            "create directory",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("output/image_0.png"));
        assert!(message.contains("denied"));
        assert!(error.source().is_some());

        assert!(matches!(
            error,
            AlponaError::FileSystem { ref path, .. } if path == &PathBuf::from("output/image_0.png")
        ));
    }

    // Tests export errors keep the path that failed and their cause
    // Verified by dropping the path from the export message
    #[test]
    fn test_image_export_error() {
        let error = AlponaError::ImageExport {
            path: PathBuf::from("output/image_3.png"),
            source: image::ImageError::IoError(io::Error::other("broken pipe")),
        };

        let message = error.to_string();
        assert!(message.contains("output/image_3.png"));
        assert!(message.contains("broken pipe"));
        assert!(error.source().is_some());
    }

    // Tests that validation errors carry no underlying cause
    // Verified by returning self as the source
    #[test]
    fn test_validation_errors_have_no_source() {
        assert!(
            AlponaError::EmptyMotifPool { pool: "filled" }
                .source()
                .is_none()
        );
        assert!(invalid_parameter("palette", &"x", &"y").source().is_none());
    }
}
