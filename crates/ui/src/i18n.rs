//! Interface labels in English and Arabic
//!
//! Only the chrome (navigation, headings, buttons, column titles) is
//! translated. Service messages stay in English.

use waconsole_core::Language;

/// Translatable label keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    AppTitle,
    Dashboard,
    Customers,
    Subscriptions,
    Settings,
    Welcome,
    WelcomeSubtitle,
    ManageCustomers,
    ManageSubscriptions,
    AddCustomer,
    EditCustomer,
    CustomerDetails,
    AddSubscription,
    EditSubscription,
    Search,
    ServerFilter,
    SortBy,
    FullName,
    CompanyName,
    MobileNumber,
    MasterMobileNumber,
    CreatedAt,
    Customer,
    CustomerId,
    Package,
    PackageId,
    Period,
    Price,
    Total,
    Actions,
    View,
    Edit,
    Delete,
    Save,
    Saving,
    Cancel,
    Close,
    Previous,
    Next,
    Refresh,
    Loading,
    NoRecords,
    PageSize,
    Showing,
    Of,
    Page,
    DarkMode,
    LightMode,
    Language,
    About,
    ConfirmDelete,
    DeleteWarning,
    Deleting,
    Retry,
    ServerPage,
    Connection,
    Appearance,
    ApiAddress,
    RequestTimeout,
    ServerPageSizes,
}

/// Look up a label
pub fn t(lang: Language, text: Text) -> &'static str {
    match lang {
        Language::En => en(text),
        Language::Ar => ar(text),
    }
}

fn en(text: Text) -> &'static str {
    match text {
        Text::AppTitle => "WhatsApp Console",
        Text::Dashboard => "Dashboard",
        Text::Customers => "Customers",
        Text::Subscriptions => "Subscriptions",
        Text::Settings => "Settings",
        Text::Welcome => "Welcome back",
        Text::WelcomeSubtitle => "Manage your customers and their WhatsApp subscriptions.",
        Text::ManageCustomers => "Manage customers",
        Text::ManageSubscriptions => "Manage subscriptions",
        Text::AddCustomer => "Add customer",
        Text::EditCustomer => "Edit customer",
        Text::CustomerDetails => "Customer details",
        Text::AddSubscription => "Add subscription",
        Text::EditSubscription => "Edit subscription",
        Text::Search => "Search",
        Text::ServerFilter => "Server filter",
        Text::SortBy => "Sort by",
        Text::FullName => "Full name",
        Text::CompanyName => "Company name",
        Text::MobileNumber => "Mobile number",
        Text::MasterMobileNumber => "Master mobile number",
        Text::CreatedAt => "Created",
        Text::Customer => "Customer",
        Text::CustomerId => "Customer ID",
        Text::Package => "Package",
        Text::PackageId => "Package ID",
        Text::Period => "Period",
        Text::Price => "Price",
        Text::Total => "Total",
        Text::Actions => "Actions",
        Text::View => "View",
        Text::Edit => "Edit",
        Text::Delete => "Delete",
        Text::Save => "Save",
        Text::Saving => "Saving...",
        Text::Cancel => "Cancel",
        Text::Close => "Close",
        Text::Previous => "Previous",
        Text::Next => "Next",
        Text::Refresh => "Refresh",
        Text::Loading => "Loading...",
        Text::NoRecords => "No records found",
        Text::PageSize => "Rows per page",
        Text::Showing => "Showing",
        Text::Of => "of",
        Text::Page => "Page",
        Text::DarkMode => "Dark mode",
        Text::LightMode => "Light mode",
        Text::Language => "Language",
        Text::About => "About",
        Text::ConfirmDelete => "Confirm delete",
        Text::DeleteWarning => "This action cannot be undone.",
        Text::Deleting => "Deleting...",
        Text::Retry => "Retry",
        Text::ServerPage => "Server page",
        Text::Connection => "Connection",
        Text::Appearance => "Appearance",
        Text::ApiAddress => "API",
        Text::RequestTimeout => "Timeout",
        Text::ServerPageSizes => "Page size",
    }
}

fn ar(text: Text) -> &'static str {
    match text {
        Text::AppTitle => "لوحة واتساب",
        Text::Dashboard => "الرئيسية",
        Text::Customers => "العملاء",
        Text::Subscriptions => "الاشتراكات",
        Text::Settings => "الإعدادات",
        Text::Welcome => "مرحباً بعودتك",
        Text::WelcomeSubtitle => "إدارة العملاء واشتراكات واتساب الخاصة بهم.",
        Text::ManageCustomers => "إدارة العملاء",
        Text::ManageSubscriptions => "إدارة الاشتراكات",
        Text::AddCustomer => "إضافة عميل",
        Text::EditCustomer => "تعديل العميل",
        Text::CustomerDetails => "تفاصيل العميل",
        Text::AddSubscription => "إضافة اشتراك",
        Text::EditSubscription => "تعديل الاشتراك",
        Text::Search => "بحث",
        Text::ServerFilter => "تصفية الخادم",
        Text::SortBy => "ترتيب حسب",
        Text::FullName => "الاسم الكامل",
        Text::CompanyName => "اسم الشركة",
        Text::MobileNumber => "رقم الجوال",
        Text::MasterMobileNumber => "رقم الجوال الرئيسي",
        Text::CreatedAt => "تاريخ الإنشاء",
        Text::Customer => "العميل",
        Text::CustomerId => "معرف العميل",
        Text::Package => "الباقة",
        Text::PackageId => "معرف الباقة",
        Text::Period => "المدة",
        Text::Price => "السعر",
        Text::Total => "الإجمالي",
        Text::Actions => "الإجراءات",
        Text::View => "عرض",
        Text::Edit => "تعديل",
        Text::Delete => "حذف",
        Text::Save => "حفظ",
        Text::Saving => "جارٍ الحفظ...",
        Text::Cancel => "إلغاء",
        Text::Close => "إغلاق",
        Text::Previous => "السابق",
        Text::Next => "التالي",
        Text::Refresh => "تحديث",
        Text::Loading => "جارٍ التحميل...",
        Text::NoRecords => "لا توجد سجلات",
        Text::PageSize => "عدد الصفوف",
        Text::Showing => "عرض",
        Text::Of => "من",
        Text::Page => "صفحة",
        Text::DarkMode => "الوضع الداكن",
        Text::LightMode => "الوضع الفاتح",
        Text::Language => "اللغة",
        Text::About => "حول",
        Text::ConfirmDelete => "تأكيد الحذف",
        Text::DeleteWarning => "لا يمكن التراجع عن هذا الإجراء.",
        Text::Deleting => "جارٍ الحذف...",
        Text::Retry => "إعادة المحاولة",
        Text::ServerPage => "صفحة الخادم",
        Text::Connection => "الاتصال",
        Text::Appearance => "المظهر",
        Text::ApiAddress => "عنوان الخادم",
        Text::RequestTimeout => "مهلة الطلب",
        Text::ServerPageSizes => "حجم الصفحة",
    }
}
