//! 程序入口：初始化日志、加载 Slint UI，并绑定表单控制器

use std::{cell::RefCell, rc::Rc};

use anyhow::Context;
use location_editor::{AppError, Field, FormController, FormView, RecordStore};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use slint::ComponentHandle;
use tracing_subscriber::fmt::SubscriberBuilder;

slint::include_modules!();

/// Slint窗口对 FormView 的实现，通过弱引用访问窗口
struct SlintFormView {
    window: slint::Weak<AppWindow>,
}

impl FormView for SlintFormView {
    fn field_text(&self, field: Field) -> String {
        let Some(window) = self.window.upgrade() else {
            return String::new();
        };
        let text = match field {
            Field::X => window.get_x_text(),
            Field::Y => window.get_y_text(),
            Field::Floor => window.get_floor_text(),
        };
        text.to_string()
    }

    fn set_field_text(&mut self, field: Field, text: &str) {
        if let Some(window) = self.window.upgrade() {
            match field {
                Field::X => window.set_x_text(text.into()),
                Field::Y => window.set_y_text(text.into()),
                Field::Floor => window.set_floor_text(text.into()),
            }
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let app = AppWindow::new().context("UI 初始化失败")?;
    let store = RecordStore::default();
    let path = store.path().display().to_string();

    let view = SlintFormView { window: app.as_weak() };
    let controller = FormController::new(view, store)
        .with_context(|| format!("加载 {} 失败", path))?;
    let controller = Rc::new(RefCell::new(controller));

    // 保存回调中出现的不可恢复错误：退出事件循环后由 main 返回
    let fatal: Rc<RefCell<Option<AppError>>> = Rc::new(RefCell::new(None));
    {
        let controller = controller.clone();
        let fatal = fatal.clone();
        app.on_save_pressed(move || {
            let result = controller.borrow_mut().save();
            if let Err(e) = result {
                tracing::error!("保存失败: {}", e);
                *fatal.borrow_mut() = Some(e);
                if let Err(e) = slint::quit_event_loop() {
                    tracing::error!("退出事件循环失败: {}", e);
                }
            }
        });
    }

    tracing::info!(path = %path, "应用启动成功，UI已初始化");
    app.run().context("事件循环异常退出")?;

    let fatal = fatal.borrow_mut().take();
    if let Some(e) = fatal {
        return Err(e).with_context(|| format!("保存 {} 失败", path));
    }
    Ok(())
}
