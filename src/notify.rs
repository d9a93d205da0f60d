use std::path::{Path, PathBuf};

pub fn on_catch() {
    play_sound("catch.wav");
}

pub fn on_miss() {
    play_sound("miss.wav");
}

/// Next to the executable (and up to two parents, for `target/debug`), then the cwd.
fn sound_candidates(file_name: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.extend(dir.ancestors().take(3).map(|d| d.join(file_name)));
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(file_name));
    }

    candidates
}

fn play_sound(file_name: &str) {
    let played = sound_candidates(file_name)
        .iter()
        .any(|candidate| candidate.exists() && play_sound_path(candidate));
    if !played {
        log::debug!("no sound played for {}", file_name);
    }
}

#[cfg(windows)]
fn play_sound_path(path: &Path) -> bool {
    use windows_sys::Win32::Media::Audio::{PlaySoundW, SND_ASYNC, SND_FILENAME, SND_NODEFAULT};

    let mut wide: Vec<u16> = path.as_os_str().to_string_lossy().encode_utf16().collect();
    wide.push(0);

    unsafe {
        PlaySoundW(
            wide.as_ptr(),
            std::ptr::null_mut(),
            SND_FILENAME | SND_ASYNC | SND_NODEFAULT,
        ) != 0
    }
}

#[cfg(not(windows))]
fn play_sound_path(_path: &Path) -> bool {
    false
}
