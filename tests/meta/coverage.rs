//! Checks that the unit test tree mirrors `src/` and is actually compiled

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files
    fn is_structural(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    fn rust_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files.extend(rust_files(&path)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn module_files(base: &str) -> BTreeSet<PathBuf> {
        let base = Path::new(base);
        let files = rust_files(base).unwrap_or_else(|error| {
            assert!(!base.exists(), "Failed to read {}: {error}", base.display());
            Vec::new()
        });

        files
            .into_iter()
            .filter(|path| !is_structural(path))
            .filter_map(|path| path.strip_prefix(base).ok().map(Path::to_path_buf))
            .collect()
    }

    fn report(header: &str, paths: &[String]) -> String {
        format!("{header}:\n{}", paths.join("\n"))
    }

    // Tests that every source module has a unit test file at the mirrored path
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = module_files(UNIT_DIR);
        let missing: Vec<String> = module_files(SRC_DIR)
            .difference(&tests)
            .map(|path| format!("  - src/{0} -> tests/unit/{0}", path.display()))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files missing unit tests", &missing)
        );
    }

    // Tests that no unit test file outlives the module it covers
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = module_files(SRC_DIR);
        let orphaned: Vec<String> = module_files(UNIT_DIR)
            .difference(&sources)
            .map(|path| format!("  - tests/unit/{0} -> src/{0} (missing)", path.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without source files", &orphaned)
        );
    }

    // Tests that every unit test file is declared by its parent module
    #[test]
    fn test_all_unit_test_files_are_declared() {
        let base = Path::new(UNIT_DIR);
        let mut undeclared = Vec::new();

        for relative in module_files(UNIT_DIR) {
            let path = base.join(&relative);
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let parent = path.parent().unwrap_or(base);
            let declaring = if parent == base {
                parent.join("main.rs")
            } else {
                parent.join("mod.rs")
            };

            let declared = fs::read_to_string(&declaring).is_ok_and(|content| {
                content.lines().any(|line| {
                    let line = line.trim();
                    line == format!("mod {stem};") || line == format!("pub mod {stem};")
                })
            });
            if !declared {
                undeclared.push(format!(
                    "  - {} is not declared in {}",
                    path.display(),
                    declaring.display()
                ));
            }
        }

        assert!(
            undeclared.is_empty(),
            "{}",
            report("Unit test files that are never compiled", &undeclared)
        );
    }

    // Tests that every test file other than module organization contains a test
    #[test]
    fn test_all_test_files_contain_tests() {
        let files = rust_files(Path::new("tests")).unwrap_or_default();
        let without_tests: Vec<String> = files
            .iter()
            .filter(|path| !is_structural(path))
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            without_tests.is_empty(),
            "{}",
            report("Test files without any #[test] functions", &without_tests)
        );
    }
}
