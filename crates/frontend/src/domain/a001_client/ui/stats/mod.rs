use contracts::domain::a001_client::aggregate::Client;
use leptos::prelude::*;
use std::collections::HashMap;

use crate::shared::components::stat_card::StatCard;

/// Число клиентов по городам: по убыванию количества, при равенстве — по
/// названию города. Пустой город учитывается под меткой "—".
pub fn count_by_city(items: &[Client]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for client in items {
        let city = client.fields.city.trim();
        let key = if city.is_empty() {
            "—".to_string()
        } else {
            city.to_string()
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut result: Vec<(String, usize)> = counts.into_iter().collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    result
}

/// Сводка по клиентам.
///
/// Агрегаты считаются по загруженной странице кэша, не по всей таблице.
#[component]
pub fn ClientStatistics(#[prop(into)] items: Signal<Vec<Client>>) -> impl IntoView {
    let total = Signal::derive(move || Some(items.get().len()));
    let city_count = Signal::derive(move || Some(count_by_city(&items.get()).len()));

    let top = move || count_by_city(&items.get()).into_iter().next();
    let top_count = Signal::derive(move || top().map(|(_, n)| n));
    let top_name = Signal::derive(move || top().map(|(city, _)| city));

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">"Статистика по клиентам"</h1>
            </div>
        </div>

        <div class="page__content">
            <div class="stat-card-row">
                <StatCard
                    label="Клиентов на странице".to_string()
                    icon_name="clients".to_string()
                    value=total
                />
                <StatCard
                    label="Городов".to_string()
                    icon_name="map-pin".to_string()
                    value=city_count
                />
                <StatCard
                    label="Крупнейший город".to_string()
                    icon_name="chart".to_string()
                    value=top_count
                    subtitle=top_name
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Город"</th>
                            <th class="table__header-cell">"Клиентов"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || count_by_city(&items.get())
                            key=|(city, _)| city.clone()
                            children=move |(city, count)| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{city}</td>
                                        <td class="table__cell">{count}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::aggregate::{ClientId, NewClient};
    use uuid::Uuid;

    fn client(name: &str, city: &str) -> Client {
        Client {
            id: ClientId::new(Uuid::new_v4()),
            fields: NewClient {
                custom_id: format!("C-{}", name),
                name: name.to_string(),
                phone: String::new(),
                address: String::new(),
                city: city.to_string(),
            },
        }
    }

    #[test]
    fn test_count_by_city_orders_by_count_desc() {
        let items = vec![
            client("Dupont", "Paris"),
            client("Martin", "Lyon"),
            client("Bernard", "Paris"),
            client("Petit", "Paris"),
            client("Robert", "Lyon"),
        ];

        let counts = count_by_city(&items);
        assert_eq!(
            counts,
            vec![("Paris".to_string(), 3), ("Lyon".to_string(), 2)]
        );
    }

    #[test]
    fn test_count_by_city_breaks_ties_by_name() {
        let items = vec![
            client("A", "Nice"),
            client("B", "Lyon"),
            client("C", "Nice"),
            client("D", "Lyon"),
        ];

        let counts = count_by_city(&items);
        assert_eq!(
            counts,
            vec![("Lyon".to_string(), 2), ("Nice".to_string(), 2)]
        );
    }

    #[test]
    fn test_count_by_city_groups_blank_cities() {
        let items = vec![client("A", ""), client("B", "   "), client("C", "Paris")];

        let counts = count_by_city(&items);
        assert_eq!(
            counts,
            vec![("—".to_string(), 2), ("Paris".to_string(), 1)]
        );
    }

    #[test]
    fn test_count_by_city_empty_page() {
        assert!(count_by_city(&[]).is_empty());
    }
}
