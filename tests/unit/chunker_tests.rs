/*!
 * Tests for text chunking
 */

use romalens::translation::TextChunker;
use romalens::translation::chunker::char_len;
use romalens::chunk_text;

const MENU: &str = "本日のおすすめ\n味噌ラーメン 八百円\n醤油ラーメン 七百五十円\n餃子 三百円\n生ビール 五百円\nお会計はレジでお願いします";

#[test]
fn test_chunk_text_withMenuText_shouldKeepEveryChunkWithinBudget() {
    for budget in [13, 15, 20, 40] {
        let chunks = chunk_text(MENU, budget);
        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(char_len(chunk) <= budget, "chunk {:?} exceeds {}", chunk, budget);
        }
    }
}

#[test]
fn test_chunk_text_withLinesUnderBudget_shouldReproduceTextWhenJoined() {
    let chunks = chunk_text(MENU, 20);
    assert_eq!(chunks.join("\n"), MENU);
}

#[test]
fn test_chunk_text_withLargeBudget_shouldReturnInputUnchanged() {
    assert_eq!(chunk_text(MENU, 1000), vec![MENU.to_string()]);
}

#[test]
fn test_chunk_text_withFifteenCharLines_shouldGroupByBudget() {
    let line = "あいうえおかきくけこさしすせそ";
    assert_eq!(char_len(line), 15);
    let text = format!("{line}\n{line}\n{line}");

    assert_eq!(chunk_text(&text, 20).len(), 3);
    assert_eq!(chunk_text(&text, 31), vec![format!("{line}\n{line}"), line.to_string()]);
}

#[test]
fn test_chunk_text_withLongSpacedLine_shouldSplitOnWords() {
    let chunks = chunk_text("これは とても 長い 文章 です", 5);
    assert_eq!(chunks, vec!["これは", "とても", "長い 文章", "です"]);
}

#[test]
fn test_chunk_text_withUnbreakableLine_shouldEmitItWhole() {
    let line = "吾輩は猫である名前はまだ無い";
    assert_eq!(chunk_text(line, 5), vec![line.to_string()]);
}

#[test]
fn test_chunker_fits_shouldCountCharactersNotBytes() {
    let chunker = TextChunker::new(6);
    assert!(chunker.fits("猫が好きです"));
    assert!(!chunker.fits("猫が好きですよ"));
    assert_eq!(chunker.max_chars(), 6);
}
