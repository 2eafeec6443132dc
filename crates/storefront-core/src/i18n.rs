//! UI Translations
//!
//! English and Japanese strings keyed by a typed enum.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ja];

    /// Match a BCP 47 tag such as `ja-JP`; unknown tags fall back to English
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(|c: char| c == '-' || c == '_').next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "ja" | "jp" => Language::Ja,
            _ => Language::En,
        }
    }

    /// Label shown in the language selector
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "日本語",
        }
    }

    pub fn t(&self, key: Key) -> &'static str {
        match self {
            Language::En => english(key),
            Language::Ja => japanese(key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Home,
    Browse,
    LogIn,
    LogOut,
    Account,
    SignUp,
    AddProduct,
    Product,
    Ascending,
    Descending,
    Order,
    LoadMore,
    Loading,
    Cart,
    ClearCart,
    CheckOut,
    Success,
    OrderSuccessful,
    Close,
    Edit,
    Delete,
    AddToCart,
    EditUser,
    Update,
    UserProfile,
    Username,
    Password,
    Email,
    FirstName,
    LastName,
    Phone,
    Name,
    Address,
    Submit,
    Each,
    Title,
    Price,
    Image,
    Description,
    Category,
    Hello,
    Total,
    PriceFrom,
    Submitting,
    ProductAdded,
    ProductUpdated,
    ProductDeleted,
    AccountCreated,
    AccountDeleted,
    ProductFetchFailed,
}

fn english(key: Key) -> &'static str {
    match key {
        Key::Home => "Home",
        Key::Browse => "Browse",
        Key::LogIn => "Log In",
        Key::LogOut => "Log Out",
        Key::Account => "Account",
        Key::SignUp => "Sign Up",
        Key::AddProduct => "Add Product",
        Key::Product => "Product",
        Key::Ascending => "Ascending",
        Key::Descending => "Descending",
        Key::Order => "Order",
        Key::LoadMore => "Load More",
        Key::Loading => "Loading...",
        Key::Cart => "Cart",
        Key::ClearCart => "Clear Cart",
        Key::CheckOut => "Check Out",
        Key::Success => "Success",
        Key::OrderSuccessful => "Your order has been placed!",
        Key::Close => "Close",
        Key::Edit => "Edit",
        Key::Delete => "Delete",
        Key::AddToCart => "Add to Cart",
        Key::EditUser => "Edit User",
        Key::Update => "Update",
        Key::UserProfile => "User Profile",
        Key::Username => "Username",
        Key::Password => "Password",
        Key::Email => "Email",
        Key::FirstName => "First name",
        Key::LastName => "Last name",
        Key::Phone => "Phone",
        Key::Name => "Name",
        Key::Address => "Address",
        Key::Submit => "Submit",
        Key::Each => "each",
        Key::Title => "Title",
        Key::Price => "Price",
        Key::Image => "Image",
        Key::Description => "Description",
        Key::Category => "Category",
        Key::Hello => "Hello",
        Key::Total => "Total",
        Key::PriceFrom => "from",
        Key::Submitting => "Submitting product data...",
        Key::ProductAdded => "Product has been successfully added!",
        Key::ProductUpdated => "Product has been successfully updated!",
        Key::ProductDeleted => "Product has been successfully deleted!",
        Key::AccountCreated => "Account has been successfully created!",
        Key::AccountDeleted => "Account has been successfully deleted!",
        Key::ProductFetchFailed => "Error fetching product data.",
    }
}

fn japanese(key: Key) -> &'static str {
    match key {
        Key::Home => "ホーム",
        Key::Browse => "商品一覧",
        Key::LogIn => "ログイン",
        Key::LogOut => "ログアウト",
        Key::Account => "アカウント",
        Key::SignUp => "新規登録",
        Key::AddProduct => "商品を追加",
        Key::Product => "商品",
        Key::Ascending => "昇順",
        Key::Descending => "降順",
        Key::Order => "並び順",
        Key::LoadMore => "もっと見る",
        Key::Loading => "読み込み中...",
        Key::Cart => "カート",
        Key::ClearCart => "カートを空にする",
        Key::CheckOut => "購入手続き",
        Key::Success => "成功",
        Key::OrderSuccessful => "ご注文を承りました！",
        Key::Close => "閉じる",
        Key::Edit => "編集",
        Key::Delete => "削除",
        Key::AddToCart => "カートに追加",
        Key::EditUser => "ユーザー編集",
        Key::Update => "更新",
        Key::UserProfile => "ユーザープロフィール",
        Key::Username => "ユーザー名",
        Key::Password => "パスワード",
        Key::Email => "メール",
        Key::FirstName => "名",
        Key::LastName => "姓",
        Key::Phone => "電話番号",
        Key::Name => "名前",
        Key::Address => "住所",
        Key::Submit => "送信",
        Key::Each => "各",
        Key::Title => "商品名",
        Key::Price => "価格",
        Key::Image => "画像",
        Key::Description => "説明",
        Key::Category => "カテゴリー",
        Key::Hello => "こんにちは",
        Key::Total => "合計",
        Key::PriceFrom => "価格",
        Key::Submitting => "商品データを送信中...",
        Key::ProductAdded => "商品が追加されました！",
        Key::ProductUpdated => "商品が更新されました！",
        Key::ProductDeleted => "商品が削除されました！",
        Key::AccountCreated => "アカウントが作成されました！",
        Key::AccountDeleted => "アカウントが削除されました！",
        Key::ProductFetchFailed => "商品データの取得に失敗しました。",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("ja-JP"), Language::Ja);
        assert_eq!(Language::from_tag("jp"), Language::Ja);
        assert_eq!(Language::from_tag("en-US"), Language::En);
        assert_eq!(Language::from_tag("fr"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Language::En.t(Key::CheckOut), "Check Out");
        assert_eq!(Language::Ja.t(Key::LogIn), "ログイン");
    }

    #[test]
    fn test_status_messages_are_translated() {
        for key in [
            Key::Hello,
            Key::Total,
            Key::PriceFrom,
            Key::Submitting,
            Key::ProductAdded,
            Key::ProductUpdated,
            Key::ProductDeleted,
            Key::AccountCreated,
            Key::AccountDeleted,
            Key::ProductFetchFailed,
        ] {
            assert_ne!(Language::En.t(key), Language::Ja.t(key), "{key:?}");
        }
        assert_eq!(Language::En.t(Key::ProductDeleted), "Product has been successfully deleted!");
        assert_eq!(Language::En.t(Key::ProductFetchFailed), "Error fetching product data.");
    }
}
