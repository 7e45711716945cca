//! Konfigurasi output untuk storage collaborator.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory tempat file hasil serialize ditulis
    pub output_dir: PathBuf,
    /// Extension tanpa titik
    pub extension: String,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            extension: "bin".to_string(),
            verbose: false,
        }
    }
}

impl Config {
    /// Suggested filename: nama root node + extension.
    pub fn output_path(&self, root_name: &str) -> PathBuf {
        let file = if self.extension.is_empty() {
            root_name.to_string()
        } else {
            format!("{}.{}", root_name, self.extension)
        };
        self.output_dir.join(file)
    }

    /// Parse flags dari argv (argumen pertama = nama program).
    ///
    /// Return `None` jika `--help` diminta. Flag yang tidak dikenal diabaikan.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut config = Config::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--out" | "-o" => {
                    if i + 1 < args.len() {
                        config.output_dir = PathBuf::from(&args[i + 1]);
                        i += 1;
                    }
                }
                "--ext" | "-e" => {
                    if i + 1 < args.len() {
                        config.extension = args[i + 1].trim_start_matches('.').to_string();
                        i += 1;
                    }
                }
                "--verbose" | "-v" => {
                    config.verbose = true;
                }
                "--help" | "-h" => return None,
                _ => {}
            }
            i += 1;
        }

        Some(config)
    }

    pub fn usage() -> &'static str {
        "Usage: treepack_demo [OPTIONS]\n\n\
         Options:\n  \
         -o, --out <DIR>    Output directory (default: .)\n  \
         -e, --ext <EXT>    File extension (default: bin)\n  \
         -v, --verbose      Debug logging\n  \
         -h, --help         Show this help"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(args(&["demo"])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_path("Test"), PathBuf::from("./Test.bin"));
    }

    #[test]
    fn test_parse_flags() {
        let config =
            Config::from_args(args(&["demo", "-o", "/tmp/out", "--ext", ".tp", "-v", "--bogus"]))
                .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.extension, "tp");
        assert!(config.verbose);
        assert_eq!(config.output_path("Foo"), PathBuf::from("/tmp/out/Foo.tp"));
    }

    #[test]
    fn test_missing_value_keeps_default() {
        let config = Config::from_args(args(&["demo", "--out"])).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_help() {
        assert!(Config::from_args(args(&["demo", "--help"])).is_none());
    }

    #[test]
    fn test_empty_extension() {
        let config = Config {
            extension: String::new(),
            ..Config::default()
        };
        assert_eq!(config.output_path("raw"), PathBuf::from("./raw"));
    }
}
