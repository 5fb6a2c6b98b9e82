// エイリアス呼び出しのコア処理
//
// 引数の分割とテンプレート置換はどちらも純粋関数で、
// 外部状態（設定・ロガー・ストレージ）に依存しない。

pub mod splitter;
pub mod substitution;

// 公開API
pub use splitter::{split, ParsedInvocation, SEPARATOR};
pub use substitution::{classify, substitute, SubstitutionMode};
