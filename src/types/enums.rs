//! Integer-coded enums used in Billbee payloads.

wire_enum! {
    pub enum ArticleType {
        Product = 0,
        Service = 1,
        Assembly = 2,
        Discount = 3,
    }
}

wire_enum! {
    pub enum CustomFieldType {
        Text = 0,
        Number = 1,
        Date = 2,
        Boolean = 3,
        Selection = 4,
    }
}

wire_enum! {
    pub enum OrderState {
        Ordered = 1,
        Confirmed = 2,
        Paid = 3,
        Shipped = 4,
        Reclamation = 5,
        Deleted = 6,
        Closed = 7,
        Canceled = 8,
        Archived = 9,
        DemandNote1 = 11,
        DemandNote2 = 12,
        Packed = 13,
        Offered = 14,
        PaymentReminder = 15,
        Fulfilling = 16,
    }
}

wire_enum! {
    pub enum PaymentMethod {
        BankTransfer = 1,
        CashOnDelivery = 2,
        PayPal = 3,
        Cash = 4,
        Voucher = 6,
        SofortUeberweisung = 19,
        OtherPayment = 22,
        DirectDebit = 23,
        Klarna = 25,
        Invoice = 26,
        CreditCard = 31,
        Maestro = 32,
        AmazonPayments = 44,
        Prepayment = 59,
        AmazonMarketplace = 61,
        AmazonPaymentsAdvanced = 62,
        Stripe = 63,
        SumUp = 67,
        InstallmentPurchase = 73,
        EtsyPayments = 97,
        KlarnaNew = 98,
        Ebay = 104,
    }
}

wire_enum! {
    pub enum VatMode {
        Gross = 0,
        Net = 1,
    }
}

wire_enum! {
    pub enum AddressType {
        Invoice = 1,
        Delivery = 2,
    }
}

wire_enum! {
    pub enum CustomerType {
        Consumer = 0,
        Business = 1,
    }
}

wire_enum! {
    pub enum AddressingType {
        DuSie = 0,
        Sie = 1,
        Du = 2,
    }
}

wire_enum! {
    pub enum EventType {
        NewOrder = 1,
        OrderStateChanged = 2,
        OrderShipped = 3,
        OrderCanceled = 4,
        StockChanged = 5,
        ProductCreated = 6,
        ProductUpdated = 7,
        InvoiceCreated = 8,
        PaymentReceived = 9,
    }
}

wire_enum! {
    pub enum CloudStorageType {
        Dropbox = 1,
        GoogleDrive = 2,
        OneDrive = 3,
    }
}

wire_enum! {
    pub enum LayoutTemplateType {
        Invoice = 1,
        DeliveryNote = 2,
        CreditNote = 3,
        OrderConfirmation = 4,
    }
}
