// Paylloom landing page, Leptos 0.8 CSR

fn main() {
    paylloom_landing::run();
}
