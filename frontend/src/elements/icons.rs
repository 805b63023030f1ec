use dominator::{Dom, html};

pub fn icon(name: &str) -> Dom {
    html!("i", {
        .class(["bi", name, "me-1"])
    })
}
