/// Modal informational popup, acknowledged with a key press.
#[derive(Debug, Default)]
pub struct Notice {
    pub visible: bool,
    pub title: &'static str,
    pub text: &'static str,
}

impl Notice {
    pub fn show(&mut self, title: &'static str, text: &'static str) {
        self.visible = true;
        self.title = title;
        self.text = text;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
