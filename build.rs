fn main() {
    slint_build::compile("ui/app_window.slint").expect("Slint 编译失败");
}
