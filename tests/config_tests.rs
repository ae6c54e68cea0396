use shader_cube::config::SceneConfig;
use shader_cube::shading::ShadingModel;

#[cfg(test)]
mod scene_config_tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("temp config should be writable");
        path
    }

    #[test]
    fn test_load_reads_overrides_from_disk() {
        let path = write_temp_config(
            "shader_cube_overrides.json",
            r#"{
                "shading": "time-blend",
                "cube_side": 2.5,
                "spin_seconds": 1.0,
                "path": { "corners": [[3.0, 0.0], [0.0, 3.0]], "cycle_seconds": 2.0 }
            }"#,
        );

        let config = SceneConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.shading, ShadingModel::TimeBlend);
        assert!((config.cube_side - 2.5).abs() < 1e-6);
        assert!((config.spin_seconds - 1.0).abs() < 1e-6);
        assert_eq!(config.path.corners.len(), 2);
        assert!((config.path.cycle_seconds - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_files_fall_back_to_defaults() {
        let path = write_temp_config("shader_cube_partial.json", r#"{ "shading": "gradient" }"#);
        let config = SceneConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.shading, ShadingModel::Gradient);
        assert_eq!(config.color_a, "yellow");
        assert_eq!(config.color_b, "hotpink");
        assert!((config.cube_side - 1.0).abs() < 1e-6);
        assert_eq!(config.path.corners.len(), 4, "The square path is the default");

        let fog = config.fog.as_ref().expect("Fog defaults on");
        assert!((fog.near - 5.0).abs() < 1e-6);
        assert!((fog.far - 18.0).abs() < 1e-6);

        assert_eq!(config.camera.position, [10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let path = write_temp_config("shader_cube_malformed.json", "{ not json");
        let err = SceneConfig::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(
            err.to_string().contains("parse"),
            "Expected a parse error, got: {err}"
        );
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = SceneConfig::load("/nonexistent/scene.json").unwrap_err();
        assert!(
            err.to_string().contains("failed to read scene config"),
            "got: {err}"
        );
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let path = write_temp_config("shader_cube_zero_side.json", r#"{ "cube_side": 0.0 }"#);
        assert!(
            SceneConfig::load(&path).is_err(),
            "A zero cube side should be rejected"
        );
        fs::remove_file(&path).ok();

        let path = write_temp_config(
            "shader_cube_bad_color.json",
            r#"{ "color_a": "sparkle" }"#,
        );
        assert!(
            SceneConfig::load(&path).is_err(),
            "An unknown color name should be rejected"
        );
        fs::remove_file(&path).ok();

        let path = write_temp_config(
            "shader_cube_bad_fog.json",
            r##"{ "fog": { "color": "#333333", "near": 18.0, "far": 5.0 } }"##,
        );
        assert!(
            SceneConfig::load(&path).is_err(),
            "An inverted fog range should be rejected"
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_loaded_config_mounts() {
        let path = write_temp_config(
            "shader_cube_mountable.json",
            r#"{ "shading": "blend-normalized", "fog": null }"#,
        );
        let config = SceneConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        let host = shader_cube::host::SceneHost::mount(&config).unwrap();
        let node = host.node().expect("mounted scene holds the cube");
        assert_eq!(node.material().shading(), ShadingModel::BlendNormalized);
        assert!(!node.material().fog_enabled(), "fog: null disables the fog pass");
    }
}
