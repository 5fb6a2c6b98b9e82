// ドメイン層 - エンティティとエラー定義
// 他のレイヤーから参照される基本的な型を提供

pub mod error;
pub mod types;

// 公開API
pub use error::{AliasError, AliasResult};
pub use types::Alias;
