use relaydocs_web::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
