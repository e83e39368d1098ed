//! FFI 层：以 C ABI 导出 Greeter，供宿主进程以原生插件方式加载调用。
//!
//! 约定：
//! - `greeter_run` 无参数、无返回值；内部出错时记录日志后直接 abort，不向宿主返回状态
//! - 返回 *mut c_char 的函数由 Rust 分配字符串，调用方需通过 `greeter_free_string` 释放

use std::ffi::CString;
use std::io::Write;
use std::os::raw::c_char;
use std::sync::Once;

use crate::error::GreeterError;
use crate::greeter::{Greetable, Greeter};
use crate::record::Inventory;

static LOGGING: Once = Once::new();

fn init_logging() {
    LOGGING.call_once(|| {
        crate::logging::init("warn");
    });
}

/// 将 Rust String 转为堆分配的 C 字符串指针
fn to_c_string(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// 致命错误：记录后终止进程，没有恢复路径
fn fatal(err: GreeterError, out: &mut dyn Write) -> ! {
    tracing::error!(error = %err, kind = err.kind().as_str(), "greeter failed, aborting");
    let _ = out.flush();
    std::process::abort();
}

/// 执行一次问候，出错时 abort，不向调用方返回状态
pub fn run_or_abort(greeter: &dyn Greetable, out: &mut dyn Write) {
    if let Err(e) = greeter.greet(out) {
        fatal(e, out);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 导出函数
// ═══════════════════════════════════════════════════════════════════════════

/// 输出问候语并渲染固定记录到 stdout
#[no_mangle]
pub extern "C" fn greeter_run() {
    init_logging();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match Greeter::with_defaults(Inventory::sample()) {
        Ok(greeter) => run_or_abort(&greeter, &mut out),
        Err(e) => fatal(e, &mut out),
    }
}

/// 获取版本号
#[no_mangle]
pub extern "C" fn greeter_version() -> *mut c_char {
    to_c_string(env!("CARGO_PKG_VERSION"))
}

/// 释放由本库返回的字符串
///
/// # Safety
/// `ptr` 必须是本库返回的指针或 null，且只能释放一次
#[no_mangle]
pub unsafe extern "C" fn greeter_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
