//! Greeter：输出问候语并渲染一条记录
//!
//! 核心逻辑只面向 `std::io::Write`，与调用方式（C ABI 导出、命令行）无关。

use std::io::Write;

use tracing::debug;

use crate::config::GreeterConfig;
use crate::error::GreeterError;
use crate::record::Inventory;
use crate::template::{ItemTemplate, DEFAULT_TEMPLATE};

/// 固定问候语（不含换行）
pub const GREETING: &str = "hello world";

/// 可被宿主调用的问候能力
pub trait Greetable {
    fn greet(&self, out: &mut dyn Write) -> Result<(), GreeterError>;
}

#[derive(Debug)]
pub struct Greeter {
    greeting: String,
    template: ItemTemplate,
    record: Inventory,
}

impl Greeter {
    pub fn new(greeting: impl Into<String>, template: ItemTemplate, record: Inventory) -> Self {
        Self {
            greeting: greeting.into(),
            template,
            record,
        }
    }

    /// 默认问候语 + 默认模板
    pub fn with_defaults(record: Inventory) -> Result<Self, GreeterError> {
        Ok(Self::new(
            GREETING,
            ItemTemplate::parse(DEFAULT_TEMPLATE)?,
            record,
        ))
    }

    pub fn from_config(config: &GreeterConfig, record: Inventory) -> Result<Self, GreeterError> {
        config.validate()?;
        let template = ItemTemplate::parse(&config.template)?;
        Ok(Self::new(config.greeting.clone(), template, record))
    }

    pub fn record(&self) -> &Inventory {
        &self.record
    }

    /// 输出问候行
    pub fn run(&self, out: &mut dyn Write) -> Result<(), GreeterError> {
        writeln!(out, "{}", self.greeting)?;
        Ok(())
    }

    /// 渲染指定记录；失败时不产生任何输出
    pub fn render(&self, record: &Inventory, out: &mut dyn Write) -> Result<(), GreeterError> {
        debug!(material = %record.material, count = record.count, "rendering record");
        self.template.render_to(record, out)
    }
}

impl Greetable for Greeter {
    fn greet(&self, out: &mut dyn Write) -> Result<(), GreeterError> {
        self.run(out)?;
        self.render(&self.record, out)?;
        out.flush()?;
        Ok(())
    }
}
