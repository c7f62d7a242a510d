//! Text fragments for new manifest entries, laid out the way Xcode writes them.

pub fn file_type_for(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext {
        "m" => "sourcecode.c.objc",
        "mm" => "sourcecode.cpp.objcpp",
        "c" => "sourcecode.c.c",
        "cpp" | "cc" => "sourcecode.cpp.cpp",
        "h" => "sourcecode.c.h",
        "metal" => "sourcecode.metal",
        _ => "sourcecode.swift",
    }
}

/// `PBXFileReference` declaration line.
pub fn file_reference(file_ref_id: &str, name: &str) -> String {
    format!(
        "\t\t{} /* {} */ = {{isa = PBXFileReference; lastKnownFileType = {}; path = {}; sourceTree = \"<group>\"; }};",
        file_ref_id,
        name,
        file_type_for(name),
        name
    )
}

/// `PBXBuildFile` declaration line wrapping a file reference.
pub fn build_file(build_file_id: &str, file_ref_id: &str, name: &str) -> String {
    format!(
        "\t\t{} /* {} in Sources */ = {{isa = PBXBuildFile; fileRef = {} /* {} */; }};",
        build_file_id, name, file_ref_id, name
    )
}

pub fn group_child(file_ref_id: &str, name: &str) -> String {
    format!("\t\t\t\t{} /* {} */,", file_ref_id, name)
}

pub fn build_phase_entry(build_file_id: &str, name: &str) -> String {
    format!("\t\t\t\t{} /* {} in Sources */,", build_file_id, name)
}
