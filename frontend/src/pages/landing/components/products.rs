use crate::api::Product;
use leptos::*;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let color = product.color;
    view! {
        <div
            class=format!(
                "rounded-xl border transition-all duration-300 transform hover:scale-105 p-8 text-center {}",
                color.card_classes(),
            )
            data-product=product.id.clone()
        >
            <div class=format!(
                "w-32 h-32 mx-auto mb-6 rounded-lg flex items-center justify-center text-5xl {}",
                color.accent_classes(),
            )>"🔥"</div>
            <h3 class=format!("text-2xl font-bold mb-4 {}", color.title_classes())>
                {product.name.clone()}
            </h3>
            <span class=format!(
                "inline-block rounded-full px-3 py-1 text-sm font-semibold text-white mb-4 {}",
                color.accent_classes(),
            )>{product.variant.clone()}</span>
            <p class="text-gray-400 mb-6">{product.description.clone()}</p>
            <ul class="text-left space-y-3 mb-8 text-gray-300">
                {product
                    .features
                    .iter()
                    .map(|feature| view! { <li class="flex items-center">"• "{feature.clone()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn ProductShowcase(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <section id=super::hero::PRODUCTS_SECTION class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-4">
                    "Ignite Your " <span class="text-red-400">"Passion"</span>
                </h2>
                <p class="text-xl text-center text-gray-300 mb-16">
                    "Three variants designed for your ultimate experience"
                </p>
                <div class="grid md:grid-cols-3 gap-8">
                    <For
                        each=move || products.get()
                        key=|product: &Product| product.id.clone()
                        children=move |product: Product| view! { <ProductCard product=product /> }
                    />
                </div>
            </div>
        </section>
    }
}
