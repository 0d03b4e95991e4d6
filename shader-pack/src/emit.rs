//! Generated header assembly and atomic write.
//!
//! The header is rebuilt from scratch every run and only ever replaced
//! wholesale: the text is assembled in memory, written to a temp sibling,
//! and renamed into place. A failure anywhere upstream leaves any previous
//! header byte-identical on disk.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::PipelineError;

/// Warning comment and namespace opener at the top of the generated header.
const HEADER_PREAMBLE: &str = "// ATTENTION: This file is generated by the Vanta shader pipeline. Don't edit it manually!\n\
#pragma once\n\
\n\
namespace Vanta\n\
{\n";

/// One encoded shader ready for emission.
#[derive(Debug)]
pub struct EncodedShader {
    /// `group/file`, for collision diagnostics.
    pub origin: String,
    pub symbol: String,
    pub block: String,
}

/// Assemble the full header text from encoded blocks, in input order.
///
/// Symbol collisions anywhere in the header are fatal; the generated file
/// would not compile.
pub fn render_header(shaders: &[EncodedShader]) -> Result<String, PipelineError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for shader in shaders {
        if let Some(first) = seen.insert(shader.symbol.as_str(), shader.origin.as_str()) {
            return Err(PipelineError::DuplicateSymbol {
                symbol: shader.symbol.clone(),
                first: first.to_string(),
                second: shader.origin.clone(),
            });
        }
    }

    let mut out = String::from(HEADER_PREAMBLE);
    for shader in shaders {
        out.push_str(&shader.block);
        out.push('\n');
    }
    out.push_str("}\n");
    Ok(out)
}

/// Replace the header on disk via a temp sibling and rename.
pub fn write_header(output_path: &Path, contents: &str) -> Result<(), PipelineError> {
    let tmp = output_path.with_extension("h.tmp");
    fs::write(&tmp, contents).map_err(|e| {
        PipelineError::io(
            format!("failed to write generated header `{}`", tmp.display()),
            e,
        )
    })?;
    fs::rename(&tmp, output_path).map_err(|e| {
        PipelineError::io(
            format!(
                "failed to move generated header into place at `{}`",
                output_path.display()
            ),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    fn encoded(origin: &str, file_name: &str, bytes: &[u8]) -> EncodedShader {
        let symbol = encode::symbol_name(file_name);
        EncodedShader {
            origin: origin.to_string(),
            block: encode::encode(bytes, &symbol),
            symbol,
        }
    }

    #[test]
    fn test_render_empty_header() {
        let header = render_header(&[]).unwrap();
        assert!(header.starts_with("// ATTENTION:"));
        assert!(header.contains("#pragma once"));
        assert!(header.contains("namespace Vanta\n{\n}\n"));
        assert!(!header.contains("constexpr"));
    }

    #[test]
    fn test_render_orders_blocks_and_separates_them() {
        let shaders = vec![
            encoded("basic/basic.vert.hlsl", "basic.vert.hlsl", &[1, 2]),
            encoded("basic/basic.frag.hlsl", "basic.frag.hlsl", &[3, 4]),
        ];
        let header = render_header(&shaders).unwrap();
        let vert = header.find("basic_vertScript").unwrap();
        let frag = header.find("basic_fragScript").unwrap();
        assert!(vert < frag);
        // Blank separator line after each block.
        assert!(header.contains("};\n\n"));
        assert!(header.ends_with("}\n"));
    }

    #[test]
    fn test_duplicate_symbols_are_fatal() {
        let shaders = vec![
            encoded("ui/flat.vert.hlsl", "flat.vert.hlsl", &[1]),
            encoded("mesh/flat.vert.hlsl", "flat.vert.hlsl", &[2]),
        ];
        let err = render_header(&shaders).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DuplicateSymbol { ref symbol, ref first, ref second }
                if symbol == "flat_vertScript"
                    && first == "ui/flat.vert.hlsl"
                    && second == "mesh/flat.vert.hlsl"
        ));
    }

    #[test]
    fn test_write_header_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g_prebuiltShaders.h");
        std::fs::write(&path, "old contents").unwrap();

        write_header(&path, "new contents").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new contents");
        assert!(!dir.path().join("g_prebuiltShaders.h.tmp").exists());
    }
}
