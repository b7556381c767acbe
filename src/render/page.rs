use maud::{html, Markup, Render, DOCTYPE};

#[derive(Debug)]
pub struct Page<'a> {
    pub title: &'a str,
    pub body: Markup,
}

impl Render for Page<'_> {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                }
                body {
                    main class="container" { (self.body) }
                }
            }
        }
    }
}
