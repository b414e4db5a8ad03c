use std::path::{Component, Path, PathBuf};

/// Join `path` onto `workdir` and collapse `.`, `..`, and redundant
/// separators, purely lexically. An absolute `path` overrides `workdir`.
/// Leading `..` components are kept; the filesystem is never consulted,
/// so symlinks are not resolved.
pub fn normalize_path(workdir: &str, path: &str) -> String {
    let joined = Path::new(workdir).join(path);

    let mut kept: Vec<Component> = Vec::new();
    for comp in joined.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match kept.last() {
                Some(Component::Normal(_)) => {
                    kept.pop();
                }
                // `/..` stays `/`.
                Some(Component::RootDir) => {}
                _ => kept.push(comp),
            },
            other => kept.push(other),
        }
    }

    if kept.is_empty() {
        return ".".to_string();
    }

    let mut out = PathBuf::new();
    for comp in kept {
        out.push(comp.as_os_str());
    }
    out.to_string_lossy().into_owned()
}
