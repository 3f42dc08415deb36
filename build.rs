use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("image_art.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let asset_dir = Path::new("assets").join("art");
    if !asset_dir.exists() {
        writeln!(f, "pub const IMAGE_ART: &[(&str, &str)] = &[];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(&asset_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    entries.sort();

    writeln!(f, "pub const IMAGE_ART: &[(&str, &str)] = &[").unwrap();
    for path in entries {
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path).unwrap();
        // Drop trailing blank lines so tiles center on the drawing itself.
        let art = content.trim_end_matches(['\n', '\r', ' ']);
        writeln!(f, "    ({:?}, {:?}),", stem, art).unwrap();
    }
    writeln!(f, "];").unwrap();
}
