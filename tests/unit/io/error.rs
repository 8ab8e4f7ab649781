//! Tests for error messages and source chaining

#[cfg(test)]
mod tests {
    use fugaco::CollageError;
    use fugaco::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests that every missing directory appears in the message
    #[test]
    fn test_missing_inputs_message() {
        let error = CollageError::MissingInputs {
            paths: vec![PathBuf::from("holidays"), PathBuf::from("pets")],
        };

        assert_eq!(
            error.to_string(),
            "Directory not found: \"holidays\", \"pets\""
        );
        assert!(error.source().is_none());
    }

    // Tests that the searched suffixes are listed when nothing matched
    #[test]
    fn test_no_files_message() {
        let error = CollageError::NoFilesFound {
            extensions: vec![".png".to_string(), ".jpg".to_string()],
        };

        assert_eq!(error.to_string(), "No files were found (looked for .png .jpg)");
    }

    // Tests that filesystem failures keep their underlying cause
    #[test]
    fn test_output_creation_source() {
        let error = CollageError::OutputCreation {
            path: PathBuf::from("out"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(error.to_string().contains("\"out\""));
        assert!(error.to_string().contains("denied"));
        assert!(error.source().is_some());
    }

    // Tests that image decoding failures name the file
    #[test]
    fn test_image_load_message() {
        let error = CollageError::ImageLoad {
            path: PathBuf::from("cat.png"),
            source: image::ImageError::IoError(std::io::Error::other("truncated")),
        };

        assert!(error.to_string().starts_with("Failed to load image 'cat.png'"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("size", &0, &"must be positive");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'size' = '0': must be positive"
        );
    }
}
