use contracts::domain::a001_client::aggregate::{Client, ClientId};

/// Размер страницы списка клиентов.
pub const PAGE_SIZE: usize = 10;

/// Вкладки страницы клиентов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientsTab {
    #[default]
    List,
    Add,
    Edit,
    Stats,
}

impl ClientsTab {
    pub fn key(self) -> &'static str {
        match self {
            ClientsTab::List => "list",
            ClientsTab::Add => "add",
            ClientsTab::Edit => "edit",
            ClientsTab::Stats => "stats",
        }
    }
}

/// Окно выборки для страницы: включительные границы `[from, to]`.
pub fn page_range(page: usize, page_size: usize) -> (usize, usize) {
    let from = page * page_size;
    (from, from + page_size - 1)
}

/// Состояние страницы клиентов.
///
/// Единственный владелец данных страницы: мутации проходят только через
/// методы ниже, компоненты получают снимки и коллбеки. `items` — кэш
/// текущей страницы, не зеркало таблицы; заменяется целиком при каждой
/// загрузке.
#[derive(Debug, Clone, Default)]
pub struct ClientsPageState {
    pub items: Vec<Client>,
    pub active_tab: ClientsTab,
    pub editing: Option<Client>,
    pub page: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
    last_fetch_seq: u64,
}

impl ClientsPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выдать номер очередного запроса загрузки.
    ///
    /// Ответ, пришедший с номером меньше последнего выданного, устарел и
    /// отбрасывается — поздний ответ не перетирает более новое состояние.
    pub fn begin_fetch(&mut self) -> u64 {
        self.last_fetch_seq += 1;
        self.last_fetch_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.last_fetch_seq
    }

    /// Применить успешно загруженную страницу.
    ///
    /// Возвращает `false` для устаревшего ответа; состояние при этом не
    /// меняется.
    pub fn apply_page_loaded(
        &mut self,
        seq: u64,
        page: usize,
        rows: Vec<Client>,
        total_count: usize,
    ) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.items = rows;
        self.page = page;
        self.total_count = total_count;
        self.total_pages = (total_count + PAGE_SIZE - 1) / PAGE_SIZE;
        self.is_loaded = true;
        true
    }

    /// Неудачная загрузка: прежние данные остаются как есть, снимается
    /// только заслон первой отрисовки.
    ///
    /// Возвращает `false`, если ответ устарел (уже выдан более новый номер).
    pub fn finish_fetch_failed(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.is_loaded = true;
        true
    }

    /// Вставка подтверждена: строка с серверным id добавляется в конец
    /// текущей страницы. Позиция в отсортированном порядке восстановится
    /// при следующей загрузке.
    pub fn apply_added(&mut self, client: Client) {
        self.items.push(client);
        self.active_tab = ClientsTab::List;
    }

    /// Обновление подтверждено: заменяется единственный элемент с тем же id.
    pub fn apply_updated(&mut self, updated: Client) {
        if let Some(slot) = self.items.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated;
        }
        self.editing = None;
        self.active_tab = ClientsTab::List;
    }

    /// Удаление подтверждено. Строки может не быть на текущей странице —
    /// тогда список не меняется.
    pub fn apply_deleted(&mut self, id: &ClientId) {
        self.items.retain(|c| &c.id != id);
    }

    pub fn start_edit(&mut self, client: Client) {
        self.editing = Some(client);
        self.active_tab = ClientsTab::Edit;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.active_tab = ClientsTab::List;
    }

    pub fn set_tab(&mut self, tab: ClientsTab) {
        self.active_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::aggregate::NewClient;
    use uuid::Uuid;

    fn client(name: &str, city: &str) -> Client {
        Client {
            id: ClientId::new(Uuid::new_v4()),
            fields: NewClient {
                custom_id: format!("C-{}", name),
                name: name.to_string(),
                phone: "0102030405".to_string(),
                address: "1 Rue A".to_string(),
                city: city.to_string(),
            },
        }
    }

    fn loaded_state() -> ClientsPageState {
        let mut state = ClientsPageState::new();
        let seq = state.begin_fetch();
        let rows = vec![client("Dupont", "Paris"), client("Martin", "Lyon")];
        assert!(state.apply_page_loaded(seq, 0, rows, 2));
        state
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(0, 10), (0, 9));
        // страница с индексом 1 при размере 10 — окно [10, 19]
        assert_eq!(page_range(1, 10), (10, 19));
        assert_eq!(page_range(3, 25), (75, 99));
    }

    #[test]
    fn test_apply_page_loaded_computes_total_pages() {
        let mut state = ClientsPageState::new();
        let seq = state.begin_fetch();
        let rows = vec![client("Dupont", "Paris")];
        assert!(state.apply_page_loaded(seq, 1, rows, 25));

        assert_eq!(state.page, 1);
        assert_eq!(state.total_count, 25);
        assert_eq!(state.total_pages, 3);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_apply_page_loaded_empty_table() {
        let mut state = ClientsPageState::new();
        let seq = state.begin_fetch();
        assert!(state.apply_page_loaded(seq, 0, Vec::new(), 0));

        assert!(state.items.is_empty());
        assert_eq!(state.total_pages, 0);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_apply_page_loaded_replaces_items_wholesale() {
        let mut state = loaded_state();
        let seq = state.begin_fetch();
        let replacement = vec![client("Bernard", "Nice")];
        assert!(state.apply_page_loaded(seq, 1, replacement, 11));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].fields.name, "Bernard");
        assert_eq!(state.total_pages, 2);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = loaded_state();
        let before = state.clone();

        let stale = state.begin_fetch();
        let _newer = state.begin_fetch();

        let applied = state.apply_page_loaded(stale, 5, vec![client("X", "Y")], 100);
        assert!(!applied);
        assert_eq!(state.items, before.items);
        assert_eq!(state.page, before.page);
        assert_eq!(state.total_pages, before.total_pages);
    }

    #[test]
    fn test_failed_fetch_leaves_state_untouched() {
        let mut state = loaded_state();
        let before = state.clone();

        let seq = state.begin_fetch();
        assert!(state.finish_fetch_failed(seq));

        assert_eq!(state.items, before.items);
        assert_eq!(state.page, before.page);
        assert_eq!(state.total_count, before.total_count);
        assert_eq!(state.total_pages, before.total_pages);
        assert_eq!(state.active_tab, before.active_tab);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_failed_fetch_lifts_loading_gate_on_first_load() {
        let mut state = ClientsPageState::new();
        assert!(!state.is_loaded);
        let seq = state.begin_fetch();
        assert!(state.finish_fetch_failed(seq));
        assert!(state.is_loaded);
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut state = ClientsPageState::new();
        let stale = state.begin_fetch();
        let _newer = state.begin_fetch();
        assert!(!state.finish_fetch_failed(stale));
        assert!(!state.is_loaded);
    }

    #[test]
    fn test_apply_added_appends_once_and_switches_tab() {
        let mut state = loaded_state();
        state.set_tab(ClientsTab::Add);

        let added = client("Nouveau", "Paris");
        let added_id = added.id;
        state.apply_added(added);

        let occurrences = state.items.iter().filter(|c| c.id == added_id).count();
        assert_eq!(occurrences, 1);
        assert_eq!(state.active_tab, ClientsTab::List);
        // счётчики не трогаем: они отражают последнюю загрузку
        assert_eq!(state.total_count, 2);
    }

    #[test]
    fn test_apply_updated_replaces_exactly_one() {
        let mut state = loaded_state();
        let other = state.items[1].clone();

        let mut updated = state.items[0].clone();
        updated.fields.city = "Marseille".to_string();
        state.start_edit(state.items[0].clone());
        state.apply_updated(updated.clone());

        let matching: Vec<_> = state.items.iter().filter(|c| c.id == updated.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].fields.city, "Marseille");
        assert_eq!(state.items[1], other);
        assert!(state.editing.is_none());
        assert_eq!(state.active_tab, ClientsTab::List);
    }

    #[test]
    fn test_apply_deleted_removes_matching_row() {
        let mut state = loaded_state();
        let victim = state.items[0].id;
        state.apply_deleted(&victim);

        assert!(state.items.iter().all(|c| c.id != victim));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_apply_deleted_unknown_id_is_noop() {
        let mut state = loaded_state();
        let before = state.items.clone();

        let unknown = ClientId::new(Uuid::new_v4());
        state.apply_deleted(&unknown);

        assert_eq!(state.items, before);
    }

    #[test]
    fn test_tab_machine_edit_requires_client() {
        let mut state = ClientsPageState::new();
        assert_eq!(state.active_tab, ClientsTab::List);

        let target = client("Dupont", "Paris");
        state.start_edit(target.clone());
        assert_eq!(state.active_tab, ClientsTab::Edit);
        assert_eq!(state.editing.as_ref(), Some(&target));

        state.cancel_edit();
        assert_eq!(state.active_tab, ClientsTab::List);
        assert!(state.editing.is_none());
    }
}
