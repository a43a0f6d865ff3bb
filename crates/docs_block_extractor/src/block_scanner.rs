// crates/docs_block_extractor/src/block_scanner.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    /// Leading `:option:` lines of a directive, not part of the code.
    Header { parameters_seen: bool },
    Body,
}

/// Groups every indented region of `lines` into one candidate block.
///
/// Only lines that start with a space count as indented; empty lines never
/// change whether we are inside a region. Within a region, leading parameter
/// lines (trimmed text starting with `:`, plus empty lines following them) are
/// dropped. Everything from the first other line on is kept verbatim,
/// including empty lines up to the next unindented line.
pub fn scan_blocks<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut blocks: Vec<String> = Vec::new();
    let mut state = BlockState::Outside;

    for line in lines {
        if !line.is_empty() {
            if !line.starts_with(' ') {
                state = BlockState::Outside;
            } else if state == BlockState::Outside {
                blocks.push(String::new());
                state = BlockState::Header { parameters_seen: false };
            }
        }

        state = match state {
            BlockState::Header { parameters_seen } => {
                if is_parameter_line(line, parameters_seen) {
                    BlockState::Header { parameters_seen: true }
                } else {
                    BlockState::Body
                }
            }
            other => other,
        };

        if state == BlockState::Body {
            if let Some(block) = blocks.last_mut() {
                block.push_str(line);
                block.push('\n');
            }
        }
    }

    blocks
}

fn is_parameter_line(line: &str, parameters_seen: bool) -> bool {
    line.trim().starts_with(':') || (line.is_empty() && parameters_seen)
}
