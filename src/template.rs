//! 模板引擎
//!
//! 基于 minijinja，占位符写作 `{{ Name }}`，按字段名从记录中取值。
//! 采用严格模式：引用记录中不存在的字段会直接报错，而不是输出空串。

use std::io::Write;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use tracing::debug;

use crate::error::GreeterError;

/// 默认模板，输出 `<Count> items are made of <Material>\n`
pub const DEFAULT_TEMPLATE: &str = "{{ Count }} items are made of {{ Material }}\n";

// 无扩展名，minijinja 不会启用 HTML 转义
const TEMPLATE_NAME: &str = "item";

/// 编译后的模板
pub struct ItemTemplate {
    env: Environment<'static>,
}

impl ItemTemplate {
    /// 编译模板文本，语法错误返回 `TemplateParse`
    pub fn parse(source: &str) -> Result<Self, GreeterError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template_owned(TEMPLATE_NAME, source.to_owned())
            .map_err(GreeterError::TemplateParse)?;

        debug!(len = source.len(), "template compiled");
        Ok(Self { env })
    }

    /// 渲染为字符串
    pub fn render<S: Serialize>(&self, ctx: S) -> Result<String, GreeterError> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(GreeterError::TemplateRender)?;
        template.render(ctx).map_err(GreeterError::TemplateRender)
    }

    /// 渲染并写出；渲染失败时不写入任何内容
    pub fn render_to<S: Serialize, W: Write + ?Sized>(
        &self,
        ctx: S,
        out: &mut W,
    ) -> Result<(), GreeterError> {
        let text = self.render(ctx)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }
}

impl std::fmt::Debug for ItemTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = self
            .env
            .get_template(TEMPLATE_NAME)
            .map(|t| t.source().to_string())
            .unwrap_or_default();
        f.debug_struct("ItemTemplate").field("source", &source).finish()
    }
}
