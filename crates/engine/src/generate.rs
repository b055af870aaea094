use std::path::Path;

use tracing::trace;
use walk::{Folder, ScriptPolicy};

/// Renders the recursion block for one selected child folder.
///
/// The block enters the child, runs the child's own script under the
/// build-wide script name, and returns to the parent. Because every folder's
/// script carries the same name, a single root script transitively executes
/// the whole kept subtree without the generator needing global knowledge of
/// the tree.
fn child_invocation(child: &Path, script_name: &str) -> String {
    format!("cd \"{}\"\n./{script_name}\ncd ..\n", child.display())
}

/// Generates the script text for one folder record.
///
/// Pure function of the record's selected files, selected children, and the
/// policy's formatter; calling it again with the same policy produces
/// identical text. A folder with nothing selected yields an empty script
/// body, which is still valid output for the write phase.
pub fn generate(folder: &mut Folder, policy: &dyn ScriptPolicy) {
    let mut script = String::new();

    for file in &folder.files {
        script.push_str(&policy.format(file, folder));
    }
    for child in &folder.children {
        script.push_str(&child_invocation(child, &folder.script_name));
    }

    trace!(
        folder = %folder.source.display(),
        bytes = script.len(),
        "script generated"
    );
    folder.script = script;
}

/// Generates every record's script, in scan order.
pub(crate) fn generate_all(folders: &mut [Folder], policy: &dyn ScriptPolicy) {
    for folder in folders {
        generate(folder, policy);
    }
}
