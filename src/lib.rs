//! 以原生插件形式被宿主加载的 Greeter：输出问候语并渲染一条记录。

pub mod config;
pub mod error;
pub mod ffi;
pub mod greeter;
pub mod logging;
pub mod record;
pub mod template;

pub use config::GreeterConfig;
pub use error::{GreeterError, GreeterErrorKind};
pub use greeter::{Greetable, Greeter, GREETING};
pub use record::Inventory;
pub use template::{ItemTemplate, DEFAULT_TEMPLATE};
