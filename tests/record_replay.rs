//! Record a live run of the binary, then replay its scan from the cassette.

use std::path::Path;
use std::process::Command;

use jdk_srcfile::context::ServiceContext;
use jdk_srcfile::manifest::builder::build_manifest;
use jdk_srcfile::projects::ProjectTable;

#[test]
fn recorded_scan_replays_to_identical_manifest() {
    let dir = std::env::temp_dir().join("jdk_srcfile_record_replay");
    let _ = std::fs::remove_dir_all(&dir);
    let forest = dir.join("forest");
    for file in [
        "langtools/src/share/classes/com/sun/source/tree/Tree.java",
        "langtools/src/share/classes/com/sun/tools/javac/Main.java",
    ] {
        let path = forest.join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }
    let cassette = dir.join("cassettes/langtools.cassette.yaml");

    // --- Phase 1: live run with recording enabled ---
    let output = Command::new(env!("CARGO_BIN_EXE_jdk-srcfile"))
        .args(["langtools", forest.to_str().unwrap()])
        .env("JDK_SRCFILE_RECORD", &cassette)
        .env_remove("JDK_SRCFILE_PROJECTS")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(cassette.exists());
    let live = String::from_utf8(output.stdout).unwrap();

    // --- Phase 2: replay without touching the tree ---
    std::fs::remove_dir_all(&forest).unwrap();
    let replay = |working_dir: &Path| {
        let ctx = ServiceContext::replaying(&cassette, ProjectTable::default(), working_dir)
            .unwrap();
        build_manifest(&ctx, "langtools", working_dir).unwrap().to_json().unwrap()
    };

    let first = replay(&forest);
    assert_eq!(first, live);

    // --- Phase 3: determinism across replays ---
    let second = replay(&forest);
    assert_eq!(first, second);

    let _ = std::fs::remove_dir_all(&dir);
}
