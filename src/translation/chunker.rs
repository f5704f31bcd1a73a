/*!
 * Text chunking for length-limited translation requests.
 *
 * Text is grouped line by line into chunks that fit a character budget.
 * A line that is too long on its own is split on spaces instead. A single
 * word longer than the budget is emitted as one oversized chunk rather
 * than being cut mid-word.
 */

/// Splits text into chunks of at most `max_chars` characters
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    max_chars: usize,
}

impl TextChunker {
    /// Create a chunker with the given character budget
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// The character budget of this chunker
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Whether the text can be sent in one call
    pub fn fits(&self, text: &str) -> bool {
        char_len(text) <= self.max_chars
    }

    /// Split text into an ordered list of chunks
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        if text.is_empty() {
            return chunks;
        }

        let mut current_lines: Vec<&str> = Vec::new();
        let mut current_len = 0;

        for line in text.split('\n') {
            let line_len = char_len(line);
            let tentative = if current_lines.is_empty() {
                line_len
            } else {
                current_len + 1 + line_len
            };

            if tentative <= self.max_chars {
                current_lines.push(line);
                current_len = tentative;
                continue;
            }

            if !current_lines.is_empty() {
                chunks.push(current_lines.join("\n"));
                current_lines.clear();
                current_len = 0;

                if line_len <= self.max_chars {
                    current_lines.push(line);
                    current_len = line_len;
                    continue;
                }
            }

            self.split_line_by_words(line, &mut chunks);
        }

        if !current_lines.is_empty() {
            chunks.push(current_lines.join("\n"));
        }

        chunks
    }

    /// Word-level fallback for a line that exceeds the budget by itself
    fn split_line_by_words(&self, line: &str, chunks: &mut Vec<String>) {
        let mut buffer = String::new();
        let mut buffer_len = 0;

        for word in line.split(' ') {
            let word_len = char_len(word);
            let tentative = if buffer.is_empty() {
                word_len
            } else {
                buffer_len + 1 + word_len
            };

            if tentative > self.max_chars && !buffer.is_empty() {
                push_trimmed(chunks, &buffer);
                buffer.clear();
                buffer_len = 0;
            }

            if !buffer.is_empty() {
                buffer.push(' ');
                buffer_len += 1;
            }
            buffer.push_str(word);
            buffer_len += word_len;
        }

        push_trimmed(chunks, &buffer);
    }
}

fn push_trimmed(chunks: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

/// Length in characters, not bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convenience wrapper around [`TextChunker::chunk`]
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    TextChunker::new(max_chars).chunk(text)
}
